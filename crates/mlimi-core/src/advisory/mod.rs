pub mod assessment;
pub mod compose;

pub use assessment::{assess, Assessment, Establishment, Midseason, Verdict};
pub use compose::compose_paragraphs;

use crate::error::MlimiError;
use crate::signals::{CropExtractor, ForecastExtractor};
use crate::sources::{CropSummary, CropSummarySource, ForecastLookup, SeasonForecastSource};
use chrono::NaiveDate;
use serde::Serialize;

/// The signal tables used to read forecast and crop text.
#[derive(Debug, Clone)]
pub struct AdvisoryRules {
    pub forecast: ForecastExtractor,
    pub crop: CropExtractor,
}

impl AdvisoryRules {
    pub fn builtin() -> Result<Self, MlimiError> {
        Ok(AdvisoryRules {
            forecast: ForecastExtractor::builtin()?,
            crop: CropExtractor::builtin()?,
        })
    }
}

/// Result of an advisory request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AdviceOutcome {
    Advised {
        crop: String,
        district: String,
        assessment: Assessment,
        advice: String,
    },
    /// A collaborator could not supply its input; `message` is its text.
    Unavailable { message: String },
}

impl AdviceOutcome {
    /// The advisory text, or the collaborator's message.
    pub fn text(&self) -> &str {
        match self {
            AdviceOutcome::Advised { advice, .. } => advice,
            AdviceOutcome::Unavailable { message } => message,
        }
    }
}

/// Assess `crop_name` in `district` on `today` and compose the advisory.
pub fn advise(
    crop_name: &str,
    district: &str,
    today: NaiveDate,
    forecasts: &dyn SeasonForecastSource,
    crops: &dyn CropSummarySource,
    rules: &AdvisoryRules,
) -> AdviceOutcome {
    let forecast_text = match forecasts.season_forecast(district) {
        ForecastLookup::Success { forecast, .. } => forecast,
        ForecastLookup::Error { message } => {
            tracing::info!(district, %message, "no seasonal forecast");
            return AdviceOutcome::Unavailable { message };
        }
    };

    let crop_paragraph = match crops.crop_summary(crop_name) {
        CropSummary::Found(paragraph) => paragraph,
        not_found @ CropSummary::NotFound => {
            tracing::info!(crop = crop_name, "no crop summary");
            return AdviceOutcome::Unavailable {
                message: not_found.text().to_string(),
            };
        }
    };

    let forecast = rules.forecast.extract(&forecast_text);
    let crop = rules.crop.extract(&crop_paragraph);
    let assessment = assess(today, &forecast, &crop);

    tracing::debug!(
        crop = crop_name,
        district,
        in_season = assessment.in_season,
        duration_ok = assessment.duration_ok,
        verdict = ?assessment.verdict,
        "assessed season fit"
    );

    let advice = compose_paragraphs(crop_name, district, &assessment).join("\n\n");
    AdviceOutcome::Advised {
        crop: crop_name.to_string(),
        district: district.to_string(),
        assessment,
        advice,
    }
}

/// Advisory text only: the six paragraphs, or the short-circuit message.
pub fn generate_advice(
    crop_name: &str,
    district: &str,
    today: NaiveDate,
    forecasts: &dyn SeasonForecastSource,
    crops: &dyn CropSummarySource,
    rules: &AdvisoryRules,
) -> String {
    advise(crop_name, district, today, forecasts, crops, rules)
        .text()
        .to_string()
}
