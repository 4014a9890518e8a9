use crate::error::MlimiError;
use crate::rules::schema::SignalRuleSet;

const FORECAST_SIGNALS_JSON: &str = include_str!("../../../../rules/forecast-signals.json");
const CROP_SIGNALS_JSON: &str = include_str!("../../../../rules/crop-signals.json");

/// Available predefined rule tables.
pub const PRESETS: &[&str] = &["forecast", "crop"];

/// Load a predefined rule table by name.
pub fn load_preset(name: &str) -> Result<SignalRuleSet, MlimiError> {
    let json = match name {
        "forecast" => FORECAST_SIGNALS_JSON,
        "crop" => CROP_SIGNALS_JSON,
        _ => {
            return Err(MlimiError::RulesetInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let ruleset = super::parse_ruleset_str(json)?;
    tracing::debug!(preset = name, rules = ruleset.rules.len(), "loaded built-in signal rules");
    Ok(ruleset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_forecast_preset() {
        let rs = load_preset("forecast").unwrap();
        let signals = rs.signals();
        assert!(signals.contains("onset_month"));
        assert!(signals.contains("cessation_month"));
        assert!(signals.contains("jan_rain"));
        assert!(signals.contains("feb_dry_risk"));
    }

    #[test]
    fn test_load_crop_preset() {
        let rs = load_preset("crop").unwrap();
        assert_eq!(rs.rules.len(), 2);
    }

    #[test]
    fn test_unknown_preset() {
        let err = load_preset("xyz").unwrap_err();
        assert!(err.to_string().contains("forecast, crop"));
    }
}
