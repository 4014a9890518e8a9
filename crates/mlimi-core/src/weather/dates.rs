use crate::model::RawDay;
use chrono::{Datelike, NaiveDate, Weekday};

/// Resolve a "Sunday 21 December" label against `year`.
///
/// The weekday must be a valid name but is not cross-checked against the date,
/// since labels carry no year of their own.
pub fn parse_day_label(label: &str, year: i32) -> Option<NaiveDate> {
    let (weekday, rest) = label.trim().split_once(char::is_whitespace)?;
    weekday.parse::<Weekday>().ok()?;
    NaiveDate::parse_from_str(&format!("{} {}", rest.trim(), year), "%d %B %Y").ok()
}

/// Keep only the days dated today or later, in their original order.
///
/// Days whose label cannot be resolved are dropped.
pub fn retain_from(days: Vec<RawDay>, today: NaiveDate) -> Vec<RawDay> {
    let before = days.len();
    let kept: Vec<RawDay> = days
        .into_iter()
        .filter(|day| parse_day_label(&day.date, today.year()).is_some_and(|d| d >= today))
        .collect();
    if kept.len() < before {
        tracing::debug!(dropped = before - kept.len(), "dropped past or undated forecast days");
    }
    kept
}
