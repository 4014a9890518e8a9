use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MlimiError {
    #[error("failed to load signal rules from {path}: {reason}")]
    RulesetLoad { path: PathBuf, reason: String },

    #[error("invalid signal rules: {0}")]
    RulesetInvalid(String),

    #[error("failed to load reference table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("failed to parse input: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
