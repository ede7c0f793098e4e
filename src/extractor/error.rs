use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NerError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Server returned {got} results for {expected} sentences")]
    ResultCountMismatch { expected: usize, got: usize },

    #[error("No prefetched tags for sentence: {0:?}")]
    NotPrefetched(String),
}

#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("Failed to read gazetteer {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse gazetteer: {0}")]
    Parse(#[from] toml::de::Error),
}
