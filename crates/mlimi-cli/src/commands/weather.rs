use chrono::{Local, NaiveDate};
use mlimi_core::error::MlimiError;
use mlimi_core::model::RawWeek;
use mlimi_core::weather::{daily_narrative_raw, retain_from, weekly_narrative_raw};
use std::path::Path;

fn read_week(path: &Path) -> Result<RawWeek, MlimiError> {
    let json = std::fs::read_to_string(path)?;
    let week: RawWeek = serde_json::from_str(&json)?;
    tracing::debug!(district = %week.district, days = week.data.len(), "loaded week");
    Ok(week)
}

pub fn daily(input_file: &Path, day: usize) -> Result<(), MlimiError> {
    let week = read_week(input_file)?;
    let Some(raw_day) = week.data.get(day) else {
        return Err(MlimiError::ParseError(format!(
            "day {day} out of range: {} has {} day(s)",
            input_file.display(),
            week.data.len()
        )));
    };
    println!("{}", daily_narrative_raw(raw_day));
    Ok(())
}

pub fn weekly(
    input_file: &Path,
    from_today: bool,
    date: Option<NaiveDate>,
) -> Result<(), MlimiError> {
    let mut week = read_week(input_file)?;
    if from_today {
        let today = date.unwrap_or_else(|| Local::now().date_naive());
        week.data = retain_from(week.data, today);
    }
    println!("{}", weekly_narrative_raw(&week));
    Ok(())
}
