use crate::dates::{self, date_key, parse_date_key, today_key};
use crate::errors::AppError;
use crate::models::{
    DayResponse, DueTaskView, NewTaskRequest, Task, ToggleRequest, TrendResponse, WindowResponse,
};
use crate::state::AppState;
use crate::stats::{day_summary, trend_series};
use crate::tasks::{due_on, new_task, remove_task, toggle_completion};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    offset: Option<i64>,
    selected: Option<String>,
}

pub async fn index() -> Html<String> {
    Html(render_index(&today_key()))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayResponse>, AppError> {
    let date = match query.date {
        Some(value) => validate_date_key(&value)?,
        None => today_key(),
    };
    let tasks = state.tasks.lock().await;
    Ok(Json(build_day_view(&tasks, &date)))
}

pub async fn get_window(Query(query): Query<WindowQuery>) -> Json<WindowResponse> {
    let offset = query.offset.unwrap_or(0).clamp(0, 36_500) as u32;
    let days = dates::day_window(dates::today(), offset);
    let selected = dates::resolve_selection(&days, query.selected.as_deref().unwrap_or(""));
    Json(WindowResponse {
        offset,
        days,
        selected,
    })
}

pub async fn get_trend(State(state): State<AppState>) -> Json<TrendResponse> {
    let tasks = state.tasks.lock().await;
    Json(TrendResponse {
        points: trend_series(&tasks, dates::today()),
    })
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<NewTaskRequest>,
) -> Result<Json<Task>, AppError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let task = new_task(title, payload.recurring);
    let stored = task.clone();
    state.mutate(move |tasks| tasks.push(stored)).await?;

    Ok(Json(task))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = validate_date_key(&payload.date)?;
    let view = state
        .mutate(|tasks| {
            toggle_completion(tasks, &id, &date);
            build_day_view(tasks, &date)
        })
        .await?;

    Ok(Json(view))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .mutate(|tasks| {
            remove_task(tasks, &id);
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn build_day_view(tasks: &[Task], date: &str) -> DayResponse {
    let views = due_on(tasks, date)
        .into_iter()
        .map(|task| DueTaskView {
            id: task.id.clone(),
            title: task.title.clone(),
            recurring: task.recurring,
            done: task.completed_dates.iter().any(|done| done == date),
        })
        .collect();

    DayResponse {
        date: date.to_string(),
        tasks: views,
        summary: day_summary(tasks, date),
    }
}

fn validate_date_key(value: &str) -> Result<String, AppError> {
    match parse_date_key(value.trim()) {
        Some(date) => Ok(date_key(date)),
        None => Err(AppError::bad_request("date must be formatted YYYY-MM-DD")),
    }
}
