use super::{check_known_signals, SignalTable};
use crate::error::MlimiError;
use crate::model::{CropSignals, DurationRange, Signal, Tolerance};
use crate::rules::builtin;
use crate::rules::schema::SignalRuleSet;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

const SIGNALS: &[&str] = &["waterlogging", "dry_spell"];

const MATURITY_MARKER: &str = "reaching harvest maturity within";

/// Growth duration assumed when a description states none.
pub const DEFAULT_DURATION: DurationRange = DurationRange {
    min_days: 50,
    max_days: 180,
};

/// Reads growth duration and stress tolerances from a crop description.
#[derive(Debug, Clone)]
pub struct CropExtractor {
    waterlogging: SignalTable<Tolerance>,
    dry_spell: SignalTable<Tolerance>,
}

impl CropExtractor {
    pub fn new(ruleset: &SignalRuleSet) -> Result<Self, MlimiError> {
        check_known_signals(ruleset, SIGNALS)?;
        Ok(CropExtractor {
            waterlogging: SignalTable::compile(ruleset, "waterlogging", Tolerance::Medium)?,
            dry_spell: SignalTable::compile(ruleset, "dry_spell", Tolerance::Low)?,
        })
    }

    /// Extractor backed by the built-in `crop` preset.
    pub fn builtin() -> Result<Self, MlimiError> {
        Self::new(&builtin::load_preset("crop")?)
    }

    pub fn extract(&self, crop_paragraph: &str) -> CropSignals {
        let text = crop_paragraph.to_lowercase();
        let duration = match parse_duration(&text) {
            Some(range) => Signal::observed(range),
            None => {
                tracing::debug!("no usable maturity range, using default duration");
                Signal::defaulted(DEFAULT_DURATION)
            }
        };
        CropSignals {
            duration,
            waterlogging: self.waterlogging.resolve(&text),
            dry_spell: self.dry_spell.resolve(&text),
        }
    }
}

/// Parse "reaching harvest maturity within 60-90 days" into a day range.
///
/// Accepts a hyphen or an en-dash between the bounds; fractional bounds are
/// floored. Returns `None` for a missing marker, a malformed or reversed range,
/// or non-numeric bounds.
pub fn parse_duration(text: &str) -> Option<DurationRange> {
    let text = text.to_lowercase();
    let start = text.find(MATURITY_MARKER)? + MATURITY_MARKER.len();
    let after = &text[start..];
    let span = match after.find("days") {
        Some(end) => &after[..end],
        None => after,
    };

    let normalized = span.trim().replace('–', "-");
    let parts: Vec<&str> = normalized.split('-').collect();
    let [low, high] = parts.as_slice() else {
        return None;
    };

    let min_days = floor_days(low)?;
    let max_days = floor_days(high)?;
    if max_days < min_days {
        return None;
    }
    Some(DurationRange { min_days, max_days })
}

fn floor_days(s: &str) -> Option<u32> {
    Decimal::from_str(s.trim()).ok()?.floor().to_u32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Provenance;

    fn extract(text: &str) -> CropSignals {
        CropExtractor::builtin().unwrap().extract(text)
    }

    #[test]
    fn test_hyphen_range() {
        let s = extract("... reaching harvest maturity within 60-90 days, making it ...");
        assert_eq!(s.min_days(), 60);
        assert_eq!(s.max_days(), 90);
        assert_eq!(s.duration.provenance, Provenance::Observed);
    }

    #[test]
    fn test_en_dash_range() {
        let s = extract("reaching harvest maturity within 60–90 days");
        assert_eq!((s.min_days(), s.max_days()), (60, 90));
    }

    #[test]
    fn test_fractional_bounds_floored() {
        let r = parse_duration("reaching harvest maturity within 65.5 - 120.9 days").unwrap();
        assert_eq!((r.min_days, r.max_days), (65, 120));
    }

    #[test]
    fn test_unparseable_falls_back() {
        for text in [
            "a crop without any duration statement",
            "reaching harvest maturity within – days",
            "reaching harvest maturity within sixty days",
            "reaching harvest maturity within 60-90-120 days",
            "reaching harvest maturity within 90 days",
        ] {
            let s = extract(text);
            assert_eq!((s.min_days(), s.max_days()), (50, 180), "{text}");
            assert!(s.duration.is_defaulted(), "{text}");
        }
    }

    #[test]
    fn test_reversed_range_falls_back() {
        assert!(parse_duration("reaching harvest maturity within 120-60 days").is_none());
    }

    #[test]
    fn test_observed_default_values_are_distinguishable() {
        let s = extract("reaching harvest maturity within 50-180 days");
        assert_eq!((s.min_days(), s.max_days()), (50, 180));
        assert_eq!(s.duration.provenance, Provenance::Observed);
    }

    #[test]
    fn test_waterlogging_tolerance() {
        let s = extract("It does not tolerate high salinity or waterlogged soils.");
        assert_eq!(s.waterlogging.value, Tolerance::Low);
        let s = extract("It does not tolerate high salinity.");
        assert_eq!(s.waterlogging.value, Tolerance::Medium);
        assert!(s.waterlogging.is_defaulted());
    }

    #[test]
    fn test_dry_spell_tolerance() {
        assert_eq!(
            extract("it can survive in areas receiving 300 mm").dry_spell.value,
            Tolerance::Medium
        );
        assert_eq!(extract("needs steady rain").dry_spell.value, Tolerance::Low);
    }
}
