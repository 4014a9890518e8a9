use super::table::{Record, ReferenceTable};
use super::text::{
    clean_general_text, extract_edible_parts, extract_edible_uses, semicolon_to_sentence,
};
use crate::bands::{edibility_description, medicinal_description};
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

static ILLNESS_MEANINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("stomachic", "supports digestion and overall stomach health"),
        ("carminative", "may help reduce gas, bloating, and digestive discomfort"),
        ("antibacterial", "may help inhibit the growth of harmful bacteria"),
        ("antifungal", "may assist in managing fungal infections"),
        ("febrifuge", "has traditionally been used to help reduce fever"),
        ("antipyretic", "may help lower elevated body temperature"),
        ("diuretic", "supports urine flow and kidney function"),
        ("laxative", "may assist in relieving constipation"),
        ("astringent", "may help tighten tissues and reduce secretions"),
        ("expectorant", "may help clear mucus from the respiratory system"),
        ("tonic", "traditionally used to strengthen and support the body"),
    ])
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Plant,
    Illness,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plant" => Ok(SearchMode::Plant),
            "illness" => Ok(SearchMode::Illness),
            other => Err(format!("unknown search mode: {other} (expected plant or illness)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IllnessSearch {
    pub illness: String,
    pub description: String,
}

/// A plant record rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantSummary {
    pub name: String,
    pub scientific_name: String,
    pub edibility_rating: String,
    pub edibility_description: String,
    pub edible_parts: String,
    pub edible_uses: String,
    pub medicinal_rating: String,
    pub medicinal_description: String,
    pub medicinal_properties: String,
    pub other_uses: String,
    pub care: String,
    pub propagation: String,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illness_search: Option<IllnessSearch>,
}

impl PlantSummary {
    pub fn from_record(row: &Record) -> PlantSummary {
        let raw_edible = row.get("Edible Uses");
        let listed = |key: &str| semicolon_to_sentence(&clean_general_text(row.get(key)));

        PlantSummary {
            name: row.get("Common Name").to_string(),
            scientific_name: row.get("Scientific Name").to_string(),
            edibility_rating: row.get("Edibility Rating").to_string(),
            edibility_description: edibility_description(row.get("Edibility Rating")).to_string(),
            edible_parts: semicolon_to_sentence(&clean_general_text(&extract_edible_parts(
                raw_edible,
            ))),
            edible_uses: clean_general_text(&extract_edible_uses(raw_edible)),
            medicinal_rating: row.get("Medicinal Rating").to_string(),
            medicinal_description: medicinal_description(row.get("Medicinal Rating")).to_string(),
            medicinal_properties: listed("Medicinal Properties"),
            other_uses: listed("Other Uses"),
            care: listed("Care Requirements"),
            propagation: clean_general_text(row.get("Propagation")),
            source_url: row.get_or("plant_url", "#").to_string(),
            illness_search: None,
        }
    }
}

/// Meaning of `illness` when it is one of the record's medicinal tags.
///
/// Tags are the cleaned semicolon-separated items of the raw
/// "Medicinal Properties" field, compared lowercase without a trailing
/// period. Returns "" when no tag matches.
pub fn illness_sentence(medicinal_properties: &str, illness: &str) -> String {
    let illness = illness.trim().to_lowercase();
    let cleaned = clean_general_text(medicinal_properties);
    let is_tag = cleaned
        .split(';')
        .map(|tag| tag.trim().trim_end_matches('.').trim().to_lowercase())
        .any(|tag| tag == illness);

    if !is_tag {
        return String::new();
    }
    match ILLNESS_MEANINGS.get(illness.as_str()) {
        Some(meaning) => meaning.to_string(),
        None => format!("has traditionally been used in relation to {illness}"),
    }
}

/// Plant reference rows (PFAF layout).
#[derive(Debug, Clone, Default)]
pub struct PlantCatalog {
    table: ReferenceTable,
}

impl PlantCatalog {
    pub fn new(table: ReferenceTable) -> Self {
        PlantCatalog { table }
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Rows matching `query` as a case-insensitive substring, in table order.
    pub fn search(&self, query: &str, mode: SearchMode) -> Vec<PlantSummary> {
        let query = query.to_lowercase();
        let contains = |row: &Record, key: &str| row.get(key).to_lowercase().contains(&query);

        let results: Vec<PlantSummary> = self
            .table
            .records()
            .iter()
            .filter(|&row| match mode {
                SearchMode::Plant => {
                    contains(row, "Common Name")
                        || contains(row, "Common Names")
                        || contains(row, "Scientific Name")
                }
                SearchMode::Illness => contains(row, "Medicinal Properties"),
            })
            .map(|row| {
                let mut summary = PlantSummary::from_record(row);
                if mode == SearchMode::Illness {
                    summary.illness_search = Some(IllnessSearch {
                        illness: query.clone(),
                        description: illness_sentence(row.get("Medicinal Properties"), &query),
                    });
                }
                summary
            })
            .collect();

        tracing::debug!(query = %query, ?mode, matches = results.len(), "plant search");
        results
    }
}
