pub mod blocks;
pub mod dates;
pub mod narrative;
pub mod readings;

pub use blocks::{summarize_blocks, BlockSummary, TimeBlock};
pub use dates::retain_from;
pub use narrative::{clean_text, daily_narrative, weekly_narrative};

use crate::model::{DayForecast, RawDay, RawWeek};

/// Narrative for one scraped day.
pub fn daily_narrative_raw(day: &RawDay) -> String {
    daily_narrative(&DayForecast::from(day))
}

/// Cleaned narrative for a scraped week.
pub fn weekly_narrative_raw(week: &RawWeek) -> String {
    let days: Vec<DayForecast> = week.data.iter().map(DayForecast::from).collect();
    weekly_narrative(&days)
}
