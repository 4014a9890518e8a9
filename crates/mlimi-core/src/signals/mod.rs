pub mod crop;
pub mod forecast;

pub use crop::{parse_duration, CropExtractor};
pub use forecast::ForecastExtractor;

use crate::error::MlimiError;
use crate::model::Signal;
use crate::rules::schema::{SignalRuleDef, SignalRuleSet};
use std::str::FromStr;

/// Rules for one signal, with values already parsed into `T`.
#[derive(Debug, Clone)]
pub(crate) struct SignalTable<T> {
    signal: &'static str,
    rules: Vec<(SignalRuleDef, T)>,
    default: T,
}

impl<T> SignalTable<T>
where
    T: FromStr<Err = String> + Copy,
{
    /// Collect the rules for `signal` from `ruleset`, rejecting values that do
    /// not parse as `T`.
    pub(crate) fn compile(
        ruleset: &SignalRuleSet,
        signal: &'static str,
        default: T,
    ) -> Result<Self, MlimiError> {
        let mut rules = Vec::new();
        for rule in ruleset.rules.iter().filter(|r| r.signal == signal) {
            let value = rule.value.parse::<T>().map_err(|e| {
                MlimiError::RulesetInvalid(format!(
                    "{}: rule for '{}' has invalid value: {}",
                    ruleset.name, signal, e
                ))
            })?;
            rules.push((rule.clone(), value));
        }
        Ok(SignalTable {
            signal,
            rules,
            default,
        })
    }

    /// Value of the first matching rule, or the default.
    ///
    /// `text` must already be lowercased.
    pub(crate) fn resolve(&self, text: &str) -> Signal<T> {
        let hit = self
            .rules
            .iter()
            .find(|(rule, _)| rule.matches(text));
        match hit {
            Some((_, value)) => Signal::observed(*value),
            None => {
                tracing::debug!(signal = self.signal, "no rule matched, using default");
                Signal::defaulted(self.default)
            }
        }
    }
}

/// Reject tables that name signals the extractor does not read.
pub(crate) fn check_known_signals(
    ruleset: &SignalRuleSet,
    known: &[&str],
) -> Result<(), MlimiError> {
    for signal in ruleset.signals() {
        if !known.contains(&signal) {
            return Err(MlimiError::RulesetInvalid(format!(
                "{}: unknown signal '{}' (expected one of: {})",
                ruleset.name,
                signal,
                known.join(", ")
            )));
        }
    }
    Ok(())
}
