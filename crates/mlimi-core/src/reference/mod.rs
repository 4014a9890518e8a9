pub mod crop;
pub mod plant;
pub mod soil;
pub mod table;
pub mod text;

pub use crop::{crop_paragraph, CropCatalog};
pub use plant::{illness_sentence, IllnessSearch, PlantCatalog, PlantSummary, SearchMode};
pub use soil::{find_crops_by_soil, CropGroups};
pub use table::{Record, ReferenceTable, TableStore};
