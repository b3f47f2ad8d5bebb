use crate::dates::{date_key, day_label};
use crate::models::{DaySummary, Task, TrendPoint};
use crate::tasks::due_on;
use chrono::{Duration, NaiveDate};

/// Status figures for one day, computed over that day's due list.
pub fn day_summary(tasks: &[Task], day: &str) -> DaySummary {
    let due = due_on(tasks, day);
    let total = due.len();
    let done = due
        .iter()
        .filter(|task| task.completed_dates.iter().any(|d| d == day))
        .count();
    let recurring = due.iter().filter(|task| task.recurring).count();
    let completion_pct = if total == 0 {
        0
    } else {
        ((done as f64 / total as f64) * 100.0).round() as u32
    };

    DaySummary {
        total,
        done,
        recurring,
        completion_pct,
    }
}

/// Completions per day over the last seven days ending at `today`. Counts
/// plain membership in `completed_dates`, with no due filter.
pub fn trend_series(tasks: &[Task], today: NaiveDate) -> Vec<TrendPoint> {
    let mut points = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset as i64);
        let key = date_key(date);
        let count = tasks
            .iter()
            .filter(|task| task.completed_dates.iter().any(|d| *d == key))
            .count();
        points.push(TrendPoint {
            date: key,
            label: day_label(date),
            count,
        });
    }
    points
}
