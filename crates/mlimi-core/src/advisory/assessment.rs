use crate::model::{CropSignals, ForecastSignals, MonthNumber, RainLevel, Tolerance};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days counted per remaining season month.
const DAYS_PER_MONTH: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Establishment {
    Favorable,
    ManagementSensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Midseason {
    Manageable,
    Conditional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Favorable,
    Cautionary,
}

/// Season fit of a crop in a district on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub date: NaiveDate,
    pub forecast: ForecastSignals,
    pub crop: CropSignals,
    /// Onset month; the month planting should have started.
    pub planting_month: MonthNumber,
    /// Onset ≤ current month ≤ cessation. A season spanning the new year
    /// (onset after cessation) never counts as in season.
    pub in_season: bool,
    pub remaining_days: u32,
    pub duration_ok: bool,
    /// Current month plus whole months of minimum growth; may exceed 12.
    pub harvest_month: u32,
    pub harvest_within_season: bool,
    pub establishment: Establishment,
    pub midseason: Midseason,
    pub verdict: Verdict,
}

/// Derive the season assessment from extracted signals.
pub fn assess(today: NaiveDate, forecast: &ForecastSignals, crop: &CropSignals) -> Assessment {
    let month = today.month();
    let onset = forecast.onset_month.value.get();
    let cessation = forecast.cessation_month.value.get();

    let in_season = onset <= month && month <= cessation;
    let remaining_days = cessation.saturating_sub(month) * DAYS_PER_MONTH;
    let duration_ok = remaining_days >= crop.min_days();

    let harvest_month = month + crop.min_days() / DAYS_PER_MONTH;
    let harvest_within_season = harvest_month <= cessation;

    let establishment = if forecast.jan_rain.value == RainLevel::High
        && crop.waterlogging.value == Tolerance::Low
    {
        Establishment::ManagementSensitive
    } else {
        Establishment::Favorable
    };

    let midseason = if forecast.feb_dry_risk.value == RainLevel::High
        && crop.dry_spell.value == Tolerance::Low
    {
        Midseason::Conditional
    } else {
        Midseason::Manageable
    };

    let verdict = if in_season && duration_ok && harvest_within_season {
        Verdict::Favorable
    } else {
        Verdict::Cautionary
    };

    Assessment {
        date: today,
        forecast: *forecast,
        crop: *crop,
        planting_month: forecast.onset_month.value,
        in_season,
        remaining_days,
        duration_ok,
        harvest_month,
        harvest_within_season,
        establishment,
        midseason,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DurationRange, Signal};

    fn forecast(onset: u32, cessation: u32, jan: RainLevel, feb: RainLevel) -> ForecastSignals {
        ForecastSignals {
            onset_month: Signal::observed(MonthNumber::new(onset).unwrap()),
            cessation_month: Signal::observed(MonthNumber::new(cessation).unwrap()),
            jan_rain: Signal::observed(jan),
            feb_dry_risk: Signal::observed(feb),
        }
    }

    fn crop(min_days: u32, waterlogging: Tolerance, dry_spell: Tolerance) -> CropSignals {
        CropSignals {
            duration: Signal::observed(DurationRange {
                min_days,
                max_days: min_days + 30,
            }),
            waterlogging: Signal::observed(waterlogging),
            dry_spell: Signal::observed(dry_spell),
        }
    }

    fn date(month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, 15).unwrap()
    }

    #[test]
    fn test_wrapping_season_is_never_in_season() {
        let f = forecast(12, 3, RainLevel::Normal, RainLevel::Normal);
        let c = crop(60, Tolerance::Medium, Tolerance::Medium);
        for month in 1..=12 {
            let a = assess(date(month), &f, &c);
            assert!(!a.in_season, "month {month} should not be in season");
            assert_eq!(a.verdict, Verdict::Cautionary);
        }
    }

    #[test]
    fn test_non_wrapping_season() {
        let f = forecast(1, 4, RainLevel::Normal, RainLevel::Normal);
        let c = crop(60, Tolerance::Medium, Tolerance::Medium);
        let in_season: Vec<u32> = (1..=12)
            .filter(|&m| assess(date(m), &f, &c).in_season)
            .collect();
        assert_eq!(in_season, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_remaining_days_and_harvest() {
        let f = forecast(1, 4, RainLevel::Normal, RainLevel::Normal);
        let c = crop(65, Tolerance::Medium, Tolerance::Medium);

        let jan = assess(date(1), &f, &c);
        assert_eq!(jan.remaining_days, 90);
        assert!(jan.duration_ok);
        assert_eq!(jan.harvest_month, 3);
        assert!(jan.harvest_within_season);
        assert_eq!(jan.verdict, Verdict::Favorable);
        assert_eq!(jan.planting_month, MonthNumber::new(1).unwrap());

        let mar = assess(date(3), &f, &c);
        assert_eq!(mar.remaining_days, 30);
        assert!(!mar.duration_ok);
        assert_eq!(mar.harvest_month, 5);
        assert!(!mar.harvest_within_season);
        assert_eq!(mar.verdict, Verdict::Cautionary);
    }

    #[test]
    fn test_remaining_days_never_negative() {
        let f = forecast(12, 3, RainLevel::Normal, RainLevel::Normal);
        let c = crop(60, Tolerance::Medium, Tolerance::Medium);
        assert_eq!(assess(date(10), &f, &c).remaining_days, 0);
    }

    #[test]
    fn test_establishment_needs_both_conditions() {
        let wet = forecast(12, 3, RainLevel::High, RainLevel::Normal);
        let dry = forecast(12, 3, RainLevel::Normal, RainLevel::Normal);
        let sensitive = crop(60, Tolerance::Low, Tolerance::Medium);
        let tolerant = crop(60, Tolerance::Medium, Tolerance::Medium);

        assert_eq!(
            assess(date(1), &wet, &sensitive).establishment,
            Establishment::ManagementSensitive
        );
        assert_eq!(assess(date(1), &wet, &tolerant).establishment, Establishment::Favorable);
        assert_eq!(assess(date(1), &dry, &sensitive).establishment, Establishment::Favorable);
    }

    #[test]
    fn test_midseason_needs_both_conditions() {
        let risky = forecast(12, 3, RainLevel::Normal, RainLevel::High);
        let calm = forecast(12, 3, RainLevel::Normal, RainLevel::Normal);
        let fragile = crop(60, Tolerance::Medium, Tolerance::Low);
        let hardy = crop(60, Tolerance::Medium, Tolerance::Medium);

        assert_eq!(assess(date(2), &risky, &fragile).midseason, Midseason::Conditional);
        assert_eq!(assess(date(2), &risky, &hardy).midseason, Midseason::Manageable);
        assert_eq!(assess(date(2), &calm, &fragile).midseason, Midseason::Manageable);
    }

    #[test]
    fn test_serializes_snake_case() {
        let f = forecast(12, 3, RainLevel::High, RainLevel::Normal);
        let c = crop(60, Tolerance::Low, Tolerance::Medium);
        let json = serde_json::to_value(assess(date(1), &f, &c)).unwrap();
        assert_eq!(json["establishment"], "management_sensitive");
        assert_eq!(json["verdict"], "cautionary");
        assert_eq!(json["date"], "2026-01-15");
        assert_eq!(json["planting_month"], 12);
    }
}
