// Cache path utilities.
// Maps key-value store keys and the log file onto the cache directory.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// File name of the application log inside the cache directory.
pub const LOG_FILE_NAME: &str = "articles-directory.log";

/// Get the base cache directory (~/.cache/articles-directory on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "articles-directory").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the file holding a single key's value.
pub fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.txt", sanitize_name(key)))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
