use thiserror::Error;

/// Error while loading a language document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed document {location}: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid source: {0}")]
    InvalidSource(String),

    #[error("Timed out waiting for content")]
    Timeout,
}

/// Error from a persistent key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Preferences I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preferences file is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
