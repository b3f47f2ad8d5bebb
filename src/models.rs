use serde::{Deserialize, Deserializer, Serialize};

/// A single tracked task. The serialized field names are the storage format
/// and must stay camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub recurring: bool,
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_date_list")]
    pub completed_dates: Vec<String>,
}

/// Accepts anything where a date list should be: a missing or non-array
/// value becomes an empty list, non-string entries are dropped.
fn lenient_date_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    pub title: String,
    #[serde(default)]
    pub recurring: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct DueTaskView {
    pub id: String,
    pub title: String,
    pub recurring: bool,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub total: usize,
    pub done: usize,
    pub recurring: usize,
    pub completion_pct: u32,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub tasks: Vec<DueTaskView>,
    pub summary: DaySummary,
}

#[derive(Debug, Serialize)]
pub struct DayCell {
    pub key: String,
    pub label: String,
    pub day: u32,
}

#[derive(Debug, Serialize)]
pub struct WindowResponse {
    pub offset: u32,
    pub days: Vec<DayCell>,
    pub selected: String,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub points: Vec<TrendPoint>,
}
