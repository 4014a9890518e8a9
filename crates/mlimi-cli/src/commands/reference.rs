use crate::output;
use mlimi_core::error::MlimiError;
use mlimi_core::reference::{
    find_crops_by_soil, CropCatalog, CropGroups, PlantCatalog, ReferenceTable, SearchMode,
};
use mlimi_core::sources::CropSummarySource;
use std::path::Path;

pub fn crop(name: &str, crops: &Path) -> Result<(), MlimiError> {
    let catalog = CropCatalog::new(ReferenceTable::load(crops)?);
    println!("{}", catalog.crop_summary(name).text());
    Ok(())
}

pub fn plants(query: &str, mode: &str, plants: &Path) -> Result<(), MlimiError> {
    let mode: SearchMode = mode.parse().map_err(MlimiError::ParseError)?;
    let catalog = PlantCatalog::new(ReferenceTable::load(plants)?);
    output::json::print(&catalog.search(query, mode))
}

pub fn soil(
    fertility: &str,
    drainage: &str,
    texture: &str,
    groups: &Path,
    crops: &Path,
) -> Result<(), MlimiError> {
    let table = ReferenceTable::load(crops)?;
    let groups = match std::fs::read_to_string(groups) {
        Ok(text) => CropGroups::parse(&text),
        Err(e) => {
            tracing::warn!(path = %groups.display(), error = %e, "crop groups unavailable, all crops unclassified");
            CropGroups::default()
        }
    };

    let found = find_crops_by_soil(fertility, drainage, texture, &table, &groups);
    output::text::print_groups(&found);
    Ok(())
}
