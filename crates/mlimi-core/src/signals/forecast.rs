use super::{check_known_signals, SignalTable};
use crate::error::MlimiError;
use crate::model::{ForecastSignals, MonthNumber, RainLevel};
use crate::rules::builtin;
use crate::rules::schema::SignalRuleSet;

const SIGNALS: &[&str] = &["onset_month", "cessation_month", "jan_rain", "feb_dry_risk"];

const DEFAULT_ONSET: MonthNumber = MonthNumber::DECEMBER;
const DEFAULT_CESSATION: MonthNumber = MonthNumber::MARCH;

/// Reads onset/cessation months and rainfall flags from a seasonal forecast.
#[derive(Debug, Clone)]
pub struct ForecastExtractor {
    onset: SignalTable<MonthNumber>,
    cessation: SignalTable<MonthNumber>,
    jan_rain: SignalTable<RainLevel>,
    feb_dry_risk: SignalTable<RainLevel>,
}

impl ForecastExtractor {
    pub fn new(ruleset: &SignalRuleSet) -> Result<Self, MlimiError> {
        check_known_signals(ruleset, SIGNALS)?;
        Ok(ForecastExtractor {
            onset: SignalTable::compile(ruleset, "onset_month", DEFAULT_ONSET)?,
            cessation: SignalTable::compile(ruleset, "cessation_month", DEFAULT_CESSATION)?,
            jan_rain: SignalTable::compile(ruleset, "jan_rain", RainLevel::Normal)?,
            feb_dry_risk: SignalTable::compile(ruleset, "feb_dry_risk", RainLevel::Normal)?,
        })
    }

    /// Extractor backed by the built-in `forecast` preset.
    pub fn builtin() -> Result<Self, MlimiError> {
        Self::new(&builtin::load_preset("forecast")?)
    }

    pub fn extract(&self, forecast_text: &str) -> ForecastSignals {
        let text = forecast_text.to_lowercase();
        ForecastSignals {
            onset_month: self.onset.resolve(&text),
            cessation_month: self.cessation.resolve(&text),
            jan_rain: self.jan_rain.resolve(&text),
            feb_dry_risk: self.feb_dry_risk.resolve(&text),
        }
    }
}
