//! Collaborators that feed the advisory compositor.

use crate::reference::text::title_case;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sentence returned when a crop name matches no reference row.
pub const CROP_NOT_FOUND: &str = "Crop not found. Please try another common name.";

/// Result of looking up a district's seasonal forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ForecastLookup {
    Success { district: String, forecast: String },
    Error { message: String },
}

/// Result of looking up a crop description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropSummary {
    Found(String),
    NotFound,
}

impl CropSummary {
    /// The paragraph, or the fixed not-found sentence.
    pub fn text(&self) -> &str {
        match self {
            CropSummary::Found(paragraph) => paragraph,
            CropSummary::NotFound => CROP_NOT_FOUND,
        }
    }
}

/// Source of seasonal forecast narratives, keyed by district.
pub trait SeasonForecastSource: Send + Sync {
    fn season_forecast(&self, district: &str) -> ForecastLookup;
}

/// Source of crop description paragraphs, keyed by common name.
pub trait CropSummarySource: Send + Sync {
    fn crop_summary(&self, crop_name: &str) -> CropSummary;
}

/// Seasonal forecasts stored as one `{DISTRICT}.txt` file per district.
#[derive(Debug, Clone)]
pub struct ForecastDirectory {
    dir: PathBuf,
}

impl ForecastDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ForecastDirectory { dir: dir.into() }
    }
}

impl SeasonForecastSource for ForecastDirectory {
    fn season_forecast(&self, district: &str) -> ForecastLookup {
        let path = self.dir.join(format!("{}.txt", district.to_uppercase()));

        if !path.exists() {
            tracing::warn!(district, path = %path.display(), "seasonal forecast file missing");
            return ForecastLookup::Error {
                message: format!("Seasonal forecast for '{district}' not found"),
            };
        }

        match std::fs::read_to_string(&path) {
            Ok(forecast) => ForecastLookup::Success {
                district: title_case(district),
                forecast,
            },
            Err(e) => ForecastLookup::Error {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_upper_case_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ZOMBA.txt"), "Onset mid-December.").unwrap();

        let source = ForecastDirectory::new(dir.path());
        assert_eq!(
            source.season_forecast("zomba"),
            ForecastLookup::Success {
                district: "Zomba".into(),
                forecast: "Onset mid-December.".into(),
            }
        );
    }

    #[test]
    fn test_missing_district() {
        let dir = tempfile::tempdir().unwrap();
        let source = ForecastDirectory::new(dir.path());
        assert_eq!(
            source.season_forecast("Atlantis"),
            ForecastLookup::Error {
                message: "Seasonal forecast for 'Atlantis' not found".into(),
            }
        );
    }

    #[test]
    fn test_lookup_json_shape() {
        let err = ForecastLookup::Error {
            message: "boom".into(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "boom");
    }

    #[test]
    fn test_not_found_text() {
        assert!(CropSummary::NotFound.text().starts_with("Crop not found"));
    }
}
