// errors.rs
use crate::extract::ExtractError;
use crate::fetch::FetchError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop one run of the command, from bad input to a
/// page that no longer matches the extractor.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid listing URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
