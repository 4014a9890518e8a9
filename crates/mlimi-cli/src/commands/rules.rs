use mlimi_core::error::MlimiError;
use mlimi_core::rules::builtin;
use mlimi_core::rules::schema::SignalRuleSet;
use mlimi_core::signals::{CropExtractor, ForecastExtractor};
use std::path::Path;

pub fn list() -> Result<(), MlimiError> {
    println!("Available built-in rule tables:\n");
    for name in builtin::PRESETS {
        let rs = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, rs.name, rs.version);
        if let Some(ref desc) = rs.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), MlimiError> {
    let rs = builtin::load_preset(preset)?;

    println!("{} (version {})\n", rs.name, rs.version);
    if let Some(ref desc) = rs.description {
        println!("{}\n", desc);
    }

    println!(
        "Rules are checked in order against the lowercased text; the first\n\
         matching rule sets the signal. Signals with no matching rule keep\n\
         their default and are reported as \"defaulted\".\n"
    );

    for signal in rs.signals() {
        println!("  {signal}");
        for rule in rs.rules.iter().filter(|r| r.signal == signal) {
            let patterns: Vec<String> = rule.all_of.iter().map(|p| format!("\"{p}\"")).collect();
            println!("    {} -> {}", patterns.join(" + "), rule.value);
            if let Some(ref note) = rule.note {
                println!("      ({})", note);
            }
        }
        println!();
    }

    Ok(())
}

pub fn schema() -> Result<(), MlimiError> {
    print!(
        r#"JSON Signal Rule Schema
=======================

A rule file maps keywords in free text to signal values. `mlimi advise`
reads the seasonal forecast with a "forecast" table and the crop
description with a "crop" table.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "2025.1")
  rules         (array, required)   List of keyword rules (see below)

Each rule in the "rules" array:
  signal        (string, required)  Signal to set.
                                    Forecast tables: onset_month,
                                    cessation_month, jan_rain, feb_dry_risk.
                                    Crop tables: waterlogging, dry_spell.
  all_of        (array, required)   Substrings that must all appear in the
                                    text (case-insensitive, any order).
  value         (string, required)  Value for the signal:
                                    months: "1" to "12"
                                    jan_rain / feb_dry_risk: "normal", "high"
                                    waterlogging / dry_spell: "low", "medium"
  note          (string, optional)  Source or explanation.

Rules are evaluated in listed order and the first match per signal wins.

Defaults when no rule matches:
  onset_month 12, cessation_month 3, jan_rain normal, feb_dry_risk normal,
  waterlogging medium, dry_spell low.

Example:
{{
  "name": "Northern region forecast signals",
  "version": "1.0",
  "rules": [
    {{
      "signal": "onset_month",
      "all_of": ["first week of december"],
      "value": "12"
    }},
    {{
      "signal": "feb_dry_risk",
      "all_of": ["february", "prolonged dry"],
      "value": "high",
      "note": "Regional bulletin wording"
    }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), MlimiError> {
    let rs = mlimi_core::rules::load_ruleset(file)?;
    let usable_as = usable_as(&rs)?;

    println!("Rule table '{}' (v{}) is valid.", rs.name, rs.version);
    println!("  Usable as: {usable_as} rules");
    println!("  Rules: {}", rs.rules.len());

    let signals = rs.signals();
    let expected: &[&str] = match usable_as {
        "forecast" => &["onset_month", "cessation_month", "jan_rain", "feb_dry_risk"],
        _ => &["waterlogging", "dry_spell"],
    };
    let warnings: Vec<String> = expected
        .iter()
        .filter(|s| !signals.contains(*s))
        .map(|s| format!("no rules for '{s}'; it will always take its default"))
        .collect();

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn usable_as(rs: &SignalRuleSet) -> Result<&'static str, MlimiError> {
    match ForecastExtractor::new(rs) {
        Ok(_) => Ok("forecast"),
        Err(forecast_err) => match CropExtractor::new(rs) {
            Ok(_) => Ok("crop"),
            Err(crop_err) => Err(MlimiError::RulesetInvalid(format!(
                "not usable as forecast rules ({forecast_err}) or crop rules ({crop_err})"
            ))),
        },
    }
}
