pub mod builtin;
pub mod schema;

use crate::error::MlimiError;
use schema::SignalRuleSet;
use std::path::Path;

/// Load a signal rule table from a JSON file.
pub fn load_ruleset(path: &Path) -> Result<SignalRuleSet, MlimiError> {
    let content = std::fs::read_to_string(path).map_err(|e| MlimiError::RulesetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_ruleset(&content, path)
}

/// Parse a signal rule table from a JSON string.
pub fn parse_ruleset(json: &str, source: &Path) -> Result<SignalRuleSet, MlimiError> {
    let ruleset: SignalRuleSet = serde_json::from_str(json).map_err(|e| MlimiError::RulesetLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Parse a signal rule table from a JSON string (no file path context).
pub fn parse_ruleset_str(json: &str) -> Result<SignalRuleSet, MlimiError> {
    let ruleset: SignalRuleSet = serde_json::from_str(json)?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Validate that a table is well-formed.
///
/// Signal names and values are checked by the extractor that consumes the
/// table, since only it knows which signals it reads.
pub fn validate_ruleset(ruleset: &SignalRuleSet) -> Result<(), MlimiError> {
    if ruleset.rules.is_empty() {
        return Err(MlimiError::RulesetInvalid("rules must not be empty".into()));
    }

    for (i, rule) in ruleset.rules.iter().enumerate() {
        if rule.signal.trim().is_empty() {
            return Err(MlimiError::RulesetInvalid(format!(
                "rule #{} has an empty signal name",
                i + 1
            )));
        }

        if rule.all_of.is_empty() {
            return Err(MlimiError::RulesetInvalid(format!(
                "rule #{} for '{}' has no patterns",
                i + 1,
                rule.signal
            )));
        }

        if rule.all_of.iter().any(|p| p.is_empty()) {
            return Err(MlimiError::RulesetInvalid(format!(
                "rule #{} for '{}' has an empty pattern",
                i + 1,
                rule.signal
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ruleset() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "rules": [
                { "signal": "onset_month", "all_of": ["mid-december"], "value": "12" }
            ]
        }"#;
        let rs = parse_ruleset_str(json).unwrap();
        assert_eq!(rs.name, "Test");
        assert_eq!(rs.rules.len(), 1);
        assert!(rs.description.is_none());
    }

    #[test]
    fn test_empty_rules_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "rules": [] }"#;
        assert!(parse_ruleset_str(json).is_err());
    }

    #[test]
    fn test_empty_pattern_list_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "rules": [ { "signal": "jan_rain", "all_of": [], "value": "high" } ]
        }"#;
        assert!(parse_ruleset_str(json).is_err());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "rules": [ { "signal": "jan_rain", "all_of": ["january", ""], "value": "high" } ]
        }"#;
        assert!(matches!(
            parse_ruleset_str(json),
            Err(MlimiError::RulesetInvalid(_))
        ));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_ruleset(Path::new("/nonexistent/rules.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rules.json"));
    }
}
