// Error types for the articles directory.
// Covers document store failures, malformed records, cache IO, and configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticlesError {
    #[error("Document store request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Permission denied by document store (check API key and security rules)")]
    PermissionDenied,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed record {id} in '{collection}': {reason}")]
    MalformedRecord {
        collection: String,
        id: String,
        reason: String,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing ARTICLES_FIRESTORE_PROJECT environment variable")]
    MissingProject,

    #[error("Could not determine a cache directory; set ARTICLES_CACHE_DIR")]
    NoCacheDir,
}

pub type Result<T> = std::result::Result<T, ArticlesError>;
