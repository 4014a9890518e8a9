use super::table::{Record, ReferenceTable};
use std::collections::{BTreeMap, HashMap};

/// Group assigned to crops missing from the group list.
pub const UNCLASSIFIED: &str = "UNCLASSIFIED";

/// Crop name to group mapping, read from a plain-text list where
/// all-uppercase lines open a group and the lines below name its crops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropGroups {
    groups: HashMap<String, String>,
}

impl CropGroups {
    pub fn parse(text: &str) -> CropGroups {
        let mut groups = HashMap::new();
        let mut current: Option<&str> = None;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if is_header(line) {
                current = Some(line);
                continue;
            }
            if let Some(group) = current {
                if line.chars().any(char::is_alphabetic) {
                    groups.insert(line.to_lowercase(), group.to_string());
                }
            }
        }

        CropGroups { groups }
    }

    pub fn group_of(&self, crop: &str) -> &str {
        self.groups.get(crop).map(String::as_str).unwrap_or(UNCLASSIFIED)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn is_header(line: &str) -> bool {
    let mut cased = line.chars().filter(|c| c.is_lowercase() || c.is_uppercase());
    let Some(first) = cased.next() else {
        return false;
    };
    first.is_uppercase() && cased.all(char::is_uppercase)
}

const SOIL_COLUMNS: [&str; 6] = ["FER", "FERR", "DRA", "DRAR", "TEXT", "TEXTR"];

/// Crops whose fertility, drainage and texture columns (or their range
/// columns) contain the given terms, grouped and sorted by crop group.
pub fn find_crops_by_soil(
    fertility: &str,
    drainage: &str,
    texture: &str,
    table: &ReferenceTable,
    groups: &CropGroups,
) -> BTreeMap<String, Vec<String>> {
    let fertility = fertility.trim().to_lowercase();
    let drainage = drainage.trim().to_lowercase();
    let texture = texture.trim().to_lowercase();

    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for row in table.records() {
        if SOIL_COLUMNS.iter().all(|col| row.get(col).is_empty()) {
            continue;
        }
        let fits = column_pair_contains(row, "FER", "FERR", &fertility)
            && column_pair_contains(row, "DRA", "DRAR", &drainage)
            && column_pair_contains(row, "TEXT", "TEXTR", &texture);
        if !fits {
            continue;
        }
        let Some((display, key)) = display_name(row) else {
            continue;
        };
        grouped
            .entry(groups.group_of(&key).to_string())
            .or_default()
            .push(display);
    }

    tracing::debug!(fertility = %fertility, drainage = %drainage, texture = %texture, groups = grouped.len(), "soil query");
    grouped
}

fn column_pair_contains(row: &Record, main: &str, range: &str, term: &str) -> bool {
    row.get(main).to_lowercase().contains(term) || row.get(range).to_lowercase().contains(term)
}

/// Display name and group lookup key for a crop row.
fn display_name(row: &Record) -> Option<(String, String)> {
    let common = row.get("CommonEnglishName");
    let widely = row.get("WidelyKnownAs");
    let scientific = row.get("ScientificName");

    match (common, widely) {
        ("", "") => {
            let genus = scientific.split_whitespace().next()?;
            Some((scientific.to_string(), genus.to_lowercase()))
        }
        (common, "") => Some((common.to_string(), common.to_lowercase())),
        ("", widely) => Some((widely.to_string(), widely.to_lowercase())),
        (common, widely) => Some((
            format!("{common} (widely known as {widely})"),
            common.to_lowercase(),
        )),
    }
}
