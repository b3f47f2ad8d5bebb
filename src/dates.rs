use crate::models::DayCell;
use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Days are keyed by the UTC calendar date so a key compares
/// chronologically as a plain string.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn day_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn today_key() -> String {
    date_key(today())
}

pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Seven consecutive days ending `offset` days before `today`, oldest first.
pub fn day_window(today: NaiveDate, offset: u32) -> Vec<DayCell> {
    let mut cells = Vec::with_capacity(7);
    for index in 0..7i64 {
        let date = today - Duration::days(i64::from(offset) + (6 - index));
        cells.push(DayCell {
            key: date_key(date),
            label: day_label(date),
            day: date.day(),
        });
    }
    cells
}

/// Keeps `selected` if it is still visible, otherwise snaps to the most
/// recent day of the window.
pub fn resolve_selection(window: &[DayCell], selected: &str) -> String {
    if window.iter().any(|cell| cell.key == selected) {
        return selected.to_string();
    }
    window
        .last()
        .map(|cell| cell.key.clone())
        .unwrap_or_else(today_key)
}
