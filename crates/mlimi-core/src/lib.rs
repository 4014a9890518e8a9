pub mod advisory;
pub mod bands;
pub mod error;
pub mod model;
pub mod reference;
pub mod rules;
pub mod signals;
pub mod sources;
pub mod weather;

use advisory::{AdviceOutcome, AdvisoryRules};
use chrono::NaiveDate;
use error::MlimiError;
use reference::{CropCatalog, ReferenceTable};
use sources::ForecastDirectory;
use std::path::Path;

pub use advisory::{advise, generate_advice};

/// Main API entry point: advise on `crop_name` in `district` using a
/// directory of `{DISTRICT}.txt` seasonal forecasts and a crop table on disk.
///
/// Only loading the crop table can fail; a missing district or crop is
/// reported through [`AdviceOutcome::Unavailable`].
pub fn advise_from_files(
    crop_name: &str,
    district: &str,
    today: NaiveDate,
    forecast_dir: &Path,
    crop_table: &Path,
    rules: &AdvisoryRules,
) -> Result<AdviceOutcome, MlimiError> {
    let forecasts = ForecastDirectory::new(forecast_dir);
    let crops = CropCatalog::new(ReferenceTable::load(crop_table)?);
    Ok(advise(crop_name, district, today, &forecasts, &crops, rules))
}
