//! Cleanup of annotated plant-database prose.

use regex::Regex;
use std::sync::LazyLock;

static REFERENCE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("valid regex"));

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\.\s*").expect("valid regex"));

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([.,])").expect("valid regex"));

static EDIBLE_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Edible Parts:\s*(.*?)\s*(?:Edible Uses:|$)").expect("valid regex")
});

static EDIBLE_USES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Edible Uses:\s*(.*)").expect("valid regex"));

static TRAILING_SECTIONS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\bEdible Parts:.*").expect("valid regex"),
        Regex::new(r"(?i)\bUses:.*").expect("valid regex"),
    ]
});

/// Section labels stripped from prose fields, longest first.
const SECTION_LABELS: &[&str] = &[
    "Medicinal Properties:",
    "Other Uses:",
    "Propagation:",
    "Care Requirements:",
    "Uses:",
    "Edible :",
];

static LABEL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SECTION_LABELS
        .iter()
        .map(|label| {
            Regex::new(&format!(r"(?i)\b{}\s*", regex::escape(label))).expect("valid regex")
        })
        .collect()
});

/// Remove bracketed reference markers such as "[K]" or "[200, 238]".
pub fn strip_references(text: &str) -> String {
    REFERENCE_MARKER.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs and drop spaces before '.' and ','.
pub fn normalize_spacing(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1").into_owned()
}

/// Render "a; b; c" as "a, b, and c".
///
/// Text without a semicolon is returned unchanged.
pub fn semicolon_to_sentence(text: &str) -> String {
    if !text.contains(';') {
        return text.to_string();
    }
    let parts: Vec<&str> = text
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// The text between "Edible Parts:" and "Edible Uses:" (or the end).
pub fn extract_edible_parts(text: &str) -> String {
    EDIBLE_PARTS
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// The text after "Edible Uses:", cut at any following section.
pub fn extract_edible_uses(text: &str) -> String {
    let Some(uses) = EDIBLE_USES
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
    else {
        return String::new();
    };
    let mut uses = uses.to_string();
    for pattern in TRAILING_SECTIONS.iter() {
        uses = pattern.replace_all(&uses, "").into_owned();
    }
    uses.trim().to_string()
}

/// Strip reference markers, section labels and list numbering, then
/// normalize spacing.
pub fn clean_general_text(text: &str) -> String {
    let mut text = strip_references(text);
    for pattern in LABEL_PATTERNS.iter() {
        text = pattern.replace_all(&text, "").into_owned();
    }
    let text = NUMBERED_ITEM.replace_all(&text, "");
    normalize_spacing(&text)
}

/// Title-case every alphabetic run: "nkhata bay" -> "Nkhata Bay".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
