use crate::errors::AppError;
use crate::models::Task;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("MYDAY_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/tasks.json"))
}

/// The stored payload is a plain JSON array of tasks. Anything else
/// degrades to an empty collection instead of failing startup.
pub fn parse_tasks(bytes: &[u8]) -> Vec<Task> {
    match serde_json::from_slice(bytes) {
        Ok(tasks) => tasks,
        Err(err) => {
            error!("failed to parse task file: {err}");
            Vec::new()
        }
    }
}

pub async fn load_tasks(path: &Path) -> Vec<Task> {
    match fs::read(path).await {
        Ok(bytes) => parse_tasks(&bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read task file: {err}");
            Vec::new()
        }
    }
}

/// Rewrites the whole collection. Concurrent processes sharing one data
/// file race last-write-wins; a single running instance is assumed.
pub async fn persist_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(tasks).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
