// Cache module for local filesystem caching.
// Persists fetched article collections between runs.

pub mod paths;
pub mod store;

pub use paths::{LOG_FILE_NAME, cache_dir};
#[cfg(test)]
pub use store::MemoryStore;
pub use store::{FileStore, KeyValueStore};
