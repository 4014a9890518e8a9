use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Whether a signal was read from the input or fell back to its named default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Observed,
    Defaulted,
}

/// An extracted value together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal<T> {
    pub value: T,
    pub provenance: Provenance,
}

impl<T> Signal<T> {
    pub fn observed(value: T) -> Self {
        Signal {
            value,
            provenance: Provenance::Observed,
        }
    }

    pub fn defaulted(value: T) -> Self {
        Signal {
            value,
            provenance: Provenance::Defaulted,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        self.provenance == Provenance::Defaulted
    }
}

/// Rainfall intensity or dry-spell risk stated by a seasonal forecast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RainLevel {
    #[default]
    Normal,
    High,
}

impl fmt::Display for RainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RainLevel::Normal => write!(f, "normal"),
            RainLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for RainLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(RainLevel::Normal),
            "high" => Ok(RainLevel::High),
            other => Err(format!("'{other}' is not a rain level (expected normal or high)")),
        }
    }
}

/// How well a crop tolerates a stress (waterlogging, dry spells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tolerance {
    Low,
    Medium,
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tolerance::Low => write!(f, "low"),
            Tolerance::Medium => write!(f, "medium"),
        }
    }
}

impl FromStr for Tolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Tolerance::Low),
            "medium" => Ok(Tolerance::Medium),
            other => Err(format!("'{other}' is not a tolerance (expected low or medium)")),
        }
    }
}

/// Calendar month number, 1 = January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthNumber(u32);

impl MonthNumber {
    pub const MARCH: MonthNumber = MonthNumber(3);
    pub const DECEMBER: MonthNumber = MonthNumber(12);

    pub fn new(month: u32) -> Option<MonthNumber> {
        (1..=12).contains(&month).then_some(MonthNumber(month))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// English month name, e.g. "November".
    pub fn name(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[(self.0 - 1) as usize]
    }
}

impl FromStr for MonthNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{s}' is not a month number"))?;
        MonthNumber::new(n).ok_or_else(|| format!("month {n} is outside 1-12"))
    }
}

impl fmt::Display for MonthNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signals read from a seasonal forecast narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSignals {
    pub onset_month: Signal<MonthNumber>,
    pub cessation_month: Signal<MonthNumber>,
    pub jan_rain: Signal<RainLevel>,
    pub feb_dry_risk: Signal<RainLevel>,
}

/// Days from planting to harvest maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min_days: u32,
    pub max_days: u32,
}

/// Signals read from a crop description paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSignals {
    pub duration: Signal<DurationRange>,
    pub waterlogging: Signal<Tolerance>,
    pub dry_spell: Signal<Tolerance>,
}

impl CropSignals {
    pub fn min_days(&self) -> u32 {
        self.duration.value.min_days
    }

    pub fn max_days(&self) -> u32 {
        self.duration.value.max_days
    }
}

/// One forecast day as scraped: a date label plus field-keyed table rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDay {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub rows: Vec<BTreeMap<String, String>>,
}

/// A district's cached week of forecast days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWeek {
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub data: Vec<RawDay>,
}

/// One sub-daily row after field parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubDailyReading {
    /// Hour of day; `None` when the time field has no parsable hour.
    pub hour: Option<u32>,
    pub max_temp: Option<Decimal>,
    pub min_temp: Option<Decimal>,
    /// Unparsable rainfall counts as zero.
    pub rainfall_mm: Decimal,
    /// Unparsable wind counts as zero.
    pub wind_speed: Decimal,
}

/// A single forecast day, readings in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayForecast {
    /// Label such as "Sunday 21 December" (no year).
    pub date: String,
    pub rows: Vec<SubDailyReading>,
}
