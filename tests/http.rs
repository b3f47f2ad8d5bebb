use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct DayResponse {
    date: String,
    tasks: Vec<DueTaskView>,
    summary: DaySummary,
}

#[derive(Debug, Deserialize)]
struct DueTaskView {
    id: String,
    title: String,
    recurring: bool,
    done: bool,
}

#[derive(Debug, Deserialize)]
struct DaySummary {
    total: usize,
    done: usize,
    recurring: usize,
    completion_pct: u32,
}

#[derive(Debug, Deserialize)]
struct WindowResponse {
    offset: u32,
    days: Vec<DayCell>,
    selected: String,
}

#[derive(Debug, Deserialize)]
struct DayCell {
    key: String,
    label: String,
    day: u32,
}

#[derive(Debug, Deserialize)]
struct TrendResponse {
    points: Vec<TrendPoint>,
}

#[derive(Debug, Deserialize)]
struct TrendPoint {
    date: String,
    label: String,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct CreatedTask {
    id: String,
    title: String,
    recurring: bool,
    #[serde(rename = "createdAt")]
    created_at: String,
    #[serde(rename = "completedDates")]
    completed_dates: Vec<String>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("myday_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/day")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server_with_file(data_path: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_myday"))
        .env("PORT", port.to_string())
        .env("MYDAY_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn spawn_server() -> TestServer {
    spawn_server_with_file(&unique_data_path()).await
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_day(client: &Client, base_url: &str, date: &str) -> DayResponse {
    client
        .get(format!("{base_url}/api/day?date={date}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn create_task(client: &Client, base_url: &str, title: &str, recurring: bool) -> CreatedTask {
    let response = client
        .post(format!("{base_url}/api/tasks"))
        .json(&serde_json::json!({ "title": title, "recurring": recurring }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_created_task_shows_up_in_its_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_task(&client, &server.base_url, "Water plants http", true).await;
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "Water plants http");
    assert!(created.recurring);
    assert_eq!(created.created_at.len(), 10);
    assert!(created.completed_dates.is_empty());

    let day = fetch_day(&client, &server.base_url, &created.created_at).await;
    let task = day
        .tasks
        .iter()
        .find(|task| task.id == created.id)
        .expect("created task missing from its day");
    assert_eq!(task.title, "Water plants http");
    assert!(!task.done);
    assert!(day.summary.total >= 1);
    assert!(day.summary.recurring >= 1);
}

#[tokio::test]
async fn http_blank_title_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "title": "   ", "recurring": false }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_double_toggle_restores_the_original_state() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_task(&client, &server.base_url, "Stretch http", true).await;
    let date = created.created_at.clone();
    let toggle_url = format!("{}/api/tasks/{}/toggle", server.base_url, created.id);

    let after_first: DayResponse = client
        .post(&toggle_url)
        .json(&serde_json::json!({ "date": date }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let task = after_first
        .tasks
        .iter()
        .find(|task| task.id == created.id)
        .unwrap();
    assert!(task.done);
    assert!(task.recurring);
    assert!(after_first.summary.done >= 1);

    let trend: TrendResponse = client
        .get(format!("{}/api/trend", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let today_point = trend.points.iter().find(|p| p.date == date).unwrap();
    assert!(today_point.count >= 1);

    let after_second: DayResponse = client
        .post(&toggle_url)
        .json(&serde_json::json!({ "date": date }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let task = after_second
        .tasks
        .iter()
        .find(|task| task.id == created.id)
        .unwrap();
    assert!(!task.done);
}

#[tokio::test]
async fn http_toggle_with_unknown_id_is_a_noop() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let today = fetch_day(&client, &server.base_url, "2024-01-05").await;
    let response = client
        .post(format!("{}/api/tasks/no-such-task/toggle", server.base_url))
        .json(&serde_json::json!({ "date": "2024-01-05" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let after: DayResponse = response.json().await.unwrap();
    assert_eq!(after.date, "2024-01-05");
    assert_eq!(after.summary.done, today.summary.done);
}

#[tokio::test]
async fn http_trend_is_seven_points_ending_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let today: DayResponse = client
        .get(format!("{}/api/day", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let trend: TrendResponse = client
        .get(format!("{}/api/trend", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(trend.points.len(), 7);
    assert_eq!(trend.points[6].date, today.date);
    for pair in trend.points.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    assert!(trend.points.iter().all(|point| !point.label.is_empty()));
}

#[tokio::test]
async fn http_window_clamps_negative_offsets_to_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let today: DayResponse = client
        .get(format!("{}/api/day", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let window: WindowResponse = client
        .get(format!("{}/api/window?offset=-14", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(window.offset, 0);
    assert_eq!(window.days.len(), 7);
    assert_eq!(window.days[6].key, today.date);
    assert_eq!(window.selected, today.date);
    assert!(window.days[6].day >= 1);
    assert!(!window.days[6].label.is_empty());
}

#[tokio::test]
async fn http_stale_selection_snaps_to_the_window_edge() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let current: WindowResponse = client
        .get(format!("{}/api/window?offset=0", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let selected = current.days[3].key.clone();

    let shifted: WindowResponse = client
        .get(format!(
            "{}/api/window?offset=7&selected={selected}",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(shifted.offset, 7);
    assert!(!shifted.days.iter().any(|cell| cell.key == selected));
    assert_eq!(shifted.selected, shifted.days[6].key);
}

#[tokio::test]
async fn http_deleted_task_disappears() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_task(&client, &server.base_url, "Throwaway http", false).await;
    let response = client
        .delete(format!("{}/api/tasks/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let day = fetch_day(&client, &server.base_url, &created.created_at).await;
    assert!(!day.tasks.iter().any(|task| task.id == created.id));
}

#[tokio::test]
async fn http_garbage_data_file_starts_empty() {
    let _guard = TEST_LOCK.lock().await;
    let data_path = unique_data_path();
    std::fs::write(&data_path, "not json").unwrap();

    let server = spawn_server_with_file(&data_path).await;
    let client = Client::new();

    let day: DayResponse = client
        .get(format!("{}/api/day", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(day.tasks.is_empty());
    assert_eq!(day.summary.total, 0);
    assert_eq!(day.summary.completion_pct, 0);
}
