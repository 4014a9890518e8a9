//! Fixed-threshold classifiers that turn measurements into qualitative bands.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const fn dec(num: u32, scale: u32) -> Decimal {
    Decimal::from_parts(num, 0, 0, false, scale)
}

const VERY_HOT_FROM: Decimal = dec(30, 0);
const HOT_FROM: Decimal = dec(25, 0);
const WARM_FROM: Decimal = dec(20, 0);

const DRY_UP_TO: Decimal = dec(3, 1);
const LIGHT_RAIN_UP_TO: Decimal = dec(5, 0);
const MODERATE_RAIN_UP_TO: Decimal = dec(10, 0);

const LIGHT_WIND_UP_TO: Decimal = dec(5, 0);
const MODERATE_WIND_UP_TO: Decimal = dec(15, 0);

const LOW_RATING_UP_TO: Decimal = dec(1, 0);
const MID_EDIBILITY_UP_TO: Decimal = dec(3, 0);
const MID_MEDICINAL: Decimal = dec(2, 0);

/// Band for a block's highest temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    VeryHot,
    Hot,
    Warm,
    Cool,
}

impl TemperatureBand {
    pub fn classify(max_temp: Decimal) -> TemperatureBand {
        if max_temp >= VERY_HOT_FROM {
            TemperatureBand::VeryHot
        } else if max_temp >= HOT_FROM {
            TemperatureBand::Hot
        } else if max_temp >= WARM_FROM {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Cool
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureBand::VeryHot => write!(f, "very hot"),
            TemperatureBand::Hot => write!(f, "hot"),
            TemperatureBand::Warm => write!(f, "warm"),
            TemperatureBand::Cool => write!(f, "cool"),
        }
    }
}

/// Band for a block's total rainfall in mm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainfallBand {
    AlmostNone,
    Light,
    Moderate,
    Heavy,
}

impl RainfallBand {
    pub fn classify(total_mm: Decimal) -> RainfallBand {
        if total_mm <= DRY_UP_TO {
            RainfallBand::AlmostNone
        } else if total_mm <= LIGHT_RAIN_UP_TO {
            RainfallBand::Light
        } else if total_mm <= MODERATE_RAIN_UP_TO {
            RainfallBand::Moderate
        } else {
            RainfallBand::Heavy
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RainfallBand::AlmostNone => "almost no rainfall, making it suitable for fieldwork",
            RainfallBand::Light => "light rain in some hours, slightly wetting the soil",
            RainfallBand::Moderate => "moderate rain, soil will stay moist",
            RainfallBand::Heavy => "heavy rain; fields may be waterlogged",
        }
    }
}

/// Band for a block's strongest wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindBand {
    VeryLight,
    Moderate,
    Strong,
}

impl WindBand {
    pub fn classify(max_wind: Decimal) -> WindBand {
        if max_wind <= LIGHT_WIND_UP_TO {
            WindBand::VeryLight
        } else if max_wind <= MODERATE_WIND_UP_TO {
            WindBand::Moderate
        } else {
            WindBand::Strong
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WindBand::VeryLight => "very light winds",
            WindBand::Moderate => "moderate winds",
            WindBand::Strong => "strong winds; take precautions",
        }
    }
}

/// Recommendation for field activities in a time block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldworkAdvice {
    Good,
    Difficult,
    Careful,
}

impl FieldworkAdvice {
    pub fn assess(total_rain: Decimal, max_wind: Decimal) -> FieldworkAdvice {
        if total_rain <= DRY_UP_TO && max_wind <= LIGHT_WIND_UP_TO {
            FieldworkAdvice::Good
        } else if total_rain > MODERATE_RAIN_UP_TO || max_wind > MODERATE_WIND_UP_TO {
            FieldworkAdvice::Difficult
        } else {
            FieldworkAdvice::Careful
        }
    }

    pub fn sentence(self) -> &'static str {
        match self {
            FieldworkAdvice::Good => "Good day for fieldwork, planting, or crop maintenance.",
            FieldworkAdvice::Difficult => {
                "Fieldwork may be difficult due to wet soil or strong winds. Delay activities."
            }
            FieldworkAdvice::Careful => {
                "Plan field activities carefully; avoid spraying during rainy or windy periods."
            }
        }
    }
}

/// Edibility band for a 0-5 plant database rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdibilityBand {
    EmergencyFood,
    ModeratelyEdible,
    HighlyEdible,
}

impl EdibilityBand {
    pub fn classify(rating: Decimal) -> EdibilityBand {
        if rating <= LOW_RATING_UP_TO {
            EdibilityBand::EmergencyFood
        } else if rating <= MID_EDIBILITY_UP_TO {
            EdibilityBand::ModeratelyEdible
        } else {
            EdibilityBand::HighlyEdible
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EdibilityBand::EmergencyFood => {
                "not commonly eaten and usually considered an emergency food"
            }
            EdibilityBand::ModeratelyEdible => "moderately edible",
            EdibilityBand::HighlyEdible => "highly edible and an important food plant",
        }
    }
}

/// Medicinal band for a 0-5 plant database rating.
///
/// Only an exact rating of 2 is "moderate"; fractional ratings between 1 and
/// 2 land in the top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicinalBand {
    Limited,
    Moderate,
    HighlyValued,
}

impl MedicinalBand {
    pub fn classify(rating: Decimal) -> MedicinalBand {
        if rating <= LOW_RATING_UP_TO {
            MedicinalBand::Limited
        } else if rating == MID_MEDICINAL {
            MedicinalBand::Moderate
        } else {
            MedicinalBand::HighlyValued
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MedicinalBand::Limited => "of limited medicinal use",
            MedicinalBand::Moderate => "of moderate medicinal importance",
            MedicinalBand::HighlyValued => "highly valued for its medicinal properties",
        }
    }
}

/// Parse a rating cell such as "3" or " 0.5 ".
pub fn parse_rating(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

pub fn edibility_description(raw_rating: &str) -> &'static str {
    match parse_rating(raw_rating) {
        Some(r) => EdibilityBand::classify(r).description(),
        None => "of unknown edibility",
    }
}

pub fn medicinal_description(raw_rating: &str) -> &'static str {
    match parse_rating(raw_rating) {
        Some(r) => MedicinalBand::classify(r).description(),
        None => "of uncertain medicinal value",
    }
}
