use crate::output;
use chrono::{Local, NaiveDate};
use mlimi_core::advisory::AdvisoryRules;
use mlimi_core::error::MlimiError;
use mlimi_core::rules::{builtin, load_ruleset};
use mlimi_core::signals::{CropExtractor, ForecastExtractor};
use std::path::{Path, PathBuf};

pub struct AdviseArgs {
    pub crop: String,
    pub district: String,
    pub date: Option<NaiveDate>,
    pub forecasts: PathBuf,
    pub crops: PathBuf,
    pub forecast_rules: Option<PathBuf>,
    pub crop_rules: Option<PathBuf>,
    pub output: String,
}

pub fn run(args: AdviseArgs) -> Result<(), MlimiError> {
    let rules = AdvisoryRules {
        forecast: ForecastExtractor::new(&ruleset_or_preset(
            args.forecast_rules.as_deref(),
            "forecast",
        )?)?,
        crop: CropExtractor::new(&ruleset_or_preset(args.crop_rules.as_deref(), "crop")?)?,
    };

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    tracing::info!(crop = %args.crop, district = %args.district, %today, "advising");

    let outcome = mlimi_core::advise_from_files(
        &args.crop,
        &args.district,
        today,
        &args.forecasts,
        &args.crops,
        &rules,
    )?;

    match args.output.as_str() {
        "json" => output::json::print(&outcome)?,
        _ => output::text::print_advice(&outcome),
    }

    Ok(())
}

fn ruleset_or_preset(
    path: Option<&Path>,
    preset: &str,
) -> Result<mlimi_core::rules::schema::SignalRuleSet, MlimiError> {
    match path {
        Some(path) => load_ruleset(path),
        None => builtin::load_preset(preset),
    }
}
