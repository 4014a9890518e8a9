use crate::model::{DayForecast, RawDay, SubDailyReading};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;

pub const TIME_FIELD: &str = "Time";
pub const MAX_TEMP_FIELD: &str = "Max Temp";
pub const MIN_TEMP_FIELD: &str = "Min Temp";
pub const RAINFALL_FIELD: &str = "Rainfall";
pub const WIND_FIELD: &str = "Wind Speed";

/// Parse a temperature cell such as "24.5°C". Unparsable cells are absent.
pub fn parse_temperature(s: &str) -> Option<Decimal> {
    parse_decimal(&s.replace("°C", ""))
}

/// Parse a rainfall cell such as "1.2mm". Unparsable cells count as zero.
pub fn parse_rainfall(s: &str) -> Decimal {
    parse_decimal(&s.replace("mm", "")).unwrap_or(Decimal::ZERO)
}

/// Parse a wind speed cell. Unparsable cells count as zero.
pub fn parse_wind(s: &str) -> Decimal {
    parse_decimal(s).unwrap_or(Decimal::ZERO)
}

/// Hour of a "HH:MM" time cell. Cells without ':' or with an hour past 23
/// have no hour.
pub fn parse_hour(s: &str) -> Option<u32> {
    let (hour, _) = s.split_once(':')?;
    hour.trim().parse::<u32>().ok().filter(|h| *h < 24)
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s).ok()
}

impl SubDailyReading {
    /// Build a reading from a scraped table row; missing fields are empty.
    pub fn from_row(row: &BTreeMap<String, String>) -> SubDailyReading {
        let field = |key: &str| row.get(key).map(String::as_str).unwrap_or("");
        SubDailyReading {
            hour: parse_hour(field(TIME_FIELD)),
            max_temp: parse_temperature(field(MAX_TEMP_FIELD)),
            min_temp: parse_temperature(field(MIN_TEMP_FIELD)),
            rainfall_mm: parse_rainfall(field(RAINFALL_FIELD)),
            wind_speed: parse_wind(field(WIND_FIELD)),
        }
    }
}

impl From<&RawDay> for DayForecast {
    fn from(raw: &RawDay) -> Self {
        DayForecast {
            date: raw.date.clone(),
            rows: raw.rows.iter().map(SubDailyReading::from_row).collect(),
        }
    }
}
