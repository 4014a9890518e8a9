use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A table of keyword rules mapping text patterns to signal values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRuleSet {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Evaluated in order; the first matching rule for a signal wins.
    pub rules: Vec<SignalRuleDef>,
}

/// A single keyword rule within a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRuleDef {
    /// Signal name, e.g. "onset_month".
    pub signal: String,
    /// Substrings that must all occur in the text (case-insensitive, any order).
    pub all_of: Vec<String>,
    /// Value assigned to the signal when the rule matches.
    pub value: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl SignalRuleDef {
    /// `text` is expected to be lowercased already.
    pub fn matches(&self, text: &str) -> bool {
        self.all_of
            .iter()
            .all(|pattern| text.contains(pattern.to_lowercase().as_str()))
    }
}

impl SignalRuleSet {
    /// Distinct signal names referenced by the table.
    pub fn signals(&self) -> BTreeSet<&str> {
        self.rules.iter().map(|r| r.signal.as_str()).collect()
    }
}
