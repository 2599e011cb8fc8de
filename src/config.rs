// Runtime configuration read from the environment.
// Names the Firestore project to query and where the local cache lives.

use std::path::PathBuf;

use crate::cache;
use crate::error::{ArticlesError, Result};

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";

/// Settings needed to reach the document store and the local cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_id: String,
    pub api_key: Option<String>,
    pub database: String,
    pub base_url: String,
    pub cache_dir: PathBuf,
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let project_id =
            non_empty("ARTICLES_FIRESTORE_PROJECT").ok_or(ArticlesError::MissingProject)?;
        let cache_dir = match non_empty("ARTICLES_CACHE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => cache::cache_dir().ok_or(ArticlesError::NoCacheDir)?,
        };

        Ok(Self {
            project_id,
            api_key: non_empty("ARTICLES_FIRESTORE_API_KEY"),
            database: non_empty("ARTICLES_FIRESTORE_DATABASE")
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            base_url: non_empty("ARTICLES_FIRESTORE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_dir,
        })
    }

    /// Root URL for documents in the configured database.
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.base_url, self.project_id, self.database
        )
    }
}
