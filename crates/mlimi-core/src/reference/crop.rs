use super::table::{Record, ReferenceTable};
use super::text::title_case;
use crate::sources::{CropSummary, CropSummarySource};

/// Crop reference rows (EcoCrop layout), searchable by common name.
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    table: ReferenceTable,
}

impl CropCatalog {
    pub fn new(table: ReferenceTable) -> Self {
        CropCatalog { table }
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// First row whose comma-separated `COMNAME` list contains `name`,
    /// compared case-insensitively after trimming.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let wanted = name.trim().to_lowercase();
        self.table.records().iter().find(|row| {
            row.get("COMNAME")
                .to_lowercase()
                .split(',')
                .any(|n| n.trim() == wanted)
        })
    }
}

impl CropSummarySource for CropCatalog {
    fn crop_summary(&self, crop_name: &str) -> CropSummary {
        match self.find(crop_name) {
            Some(row) => CropSummary::Found(crop_paragraph(row, crop_name)),
            None => {
                tracing::debug!(crop = crop_name, "crop not in reference table");
                CropSummary::NotFound
            }
        }
    }
}

/// Describe one crop row as a single paragraph. Missing fields render empty.
pub fn crop_paragraph(row: &Record, crop_name: &str) -> String {
    let crop = title_case(crop_name);
    let f = |key: &str| row.get(key);

    let temp_opt = format!("{}–{}°C", f("TOPMN"), f("TOPMX"));
    let temp_tol = format!("{}–{}°C", f("TMIN"), f("TMAX"));
    let rain_opt = format!("{}–{} mm", f("ROPMN"), f("ROPMX"));
    let rain_tol = format!("{}–{} mm", f("RMIN"), f("RMAX"));
    let ph_opt = format!("{}–{}", f("PHOPMN"), f("PHOPMX"));
    let ph_tol = format!("{}–{}", f("PHMIN"), f("PHMAX"));
    let photo = f("PHOTO").to_lowercase();

    format!(
        "The {crop} crop grows best in warm tropical to subtropical climates \
         with full sunlight and open fields, preferring optimal temperatures of \
         {temp_opt} but tolerating {temp_tol}, and performs well under annual \
         rainfall of about {rain_opt}, although it can survive in areas receiving \
         {rain_tol} if flooding is avoided. \
         It thrives in {drainage} soils with {fertility} fertility, requiring \
         {depth} soil depth and growing best in {texture} soils, \
         while tolerating {texture_tol} textures. \
         {crop} prefers slightly acidic to neutral soils (pH {ph_opt}) but \
         can tolerate a wider pH range of {ph_tol}, does not tolerate {salinity} \
         salinity or waterlogged soils, and grows as a {photo} {life_cycle} \
         crop, reaching harvest maturity within {grow_min}–{grow_max} days, \
         making it suitable for rain-fed farming in tropical regions such as Malawi.",
        drainage = f("DRA"),
        fertility = f("FER"),
        depth = f("DEP"),
        texture = f("TEXT"),
        texture_tol = f("TEXTR"),
        salinity = f("SAL"),
        life_cycle = f("LISPA"),
        grow_min = f("GMIN"),
        grow_max = f("GMAX"),
    )
}
