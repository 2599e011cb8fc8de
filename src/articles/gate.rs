// Cache gate.
// Decides at startup whether the persisted collections can be trusted.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::cache::KeyValueStore;

use super::types::{ArticleRecord, Collection};

/// How long a fetched collection stays trusted: 24 hours.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Outcome of the startup cache check.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheDecision {
    /// Both collections are cached and fresh.
    Hydrate {
        blog: Vec<ArticleRecord>,
        hub: Vec<ArticleRecord>,
    },
    /// At least one collection is missing, malformed, or stale.
    Refetch,
}

/// A collection read back from the cache with its fetch time.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub records: Vec<ArticleRecord>,
    pub fetched_at_ms: i64,
}

impl CacheEntry {
    /// Fresh iff strictly less than `window` has elapsed since the fetch.
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        let elapsed_ms = i128::from(now.timestamp_millis()) - i128::from(self.fetched_at_ms);
        elapsed_ms < window.as_millis() as i128
    }
}

/// Read a collection's cache entry. Missing, unreadable, or malformed
/// values all yield `None`.
pub fn read_entry(storage: &dyn KeyValueStore, collection: Collection) -> Option<CacheEntry> {
    let name = collection.name();

    let payload = match storage.get(name) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            debug!(collection = name, "no cached articles");
            return None;
        }
        Err(e) => {
            warn!(collection = name, error = %e, "failed to read cached articles");
            return None;
        }
    };

    let records: Vec<ArticleRecord> = match serde_json::from_str(&payload) {
        Ok(records) => records,
        Err(e) => {
            warn!(collection = name, error = %e, "malformed cached articles, refetching");
            return None;
        }
    };

    let fetched_at_ms = match storage.get(&collection.timestamp_key()) {
        Ok(Some(raw)) => match raw.trim().parse::<i64>() {
            Ok(ms) => ms,
            Err(e) => {
                warn!(collection = name, error = %e, "malformed cache timestamp, refetching");
                return None;
            }
        },
        Ok(None) => {
            debug!(collection = name, "no cache timestamp");
            return None;
        }
        Err(e) => {
            warn!(collection = name, error = %e, "failed to read cache timestamp");
            return None;
        }
    };

    Some(CacheEntry {
        records,
        fetched_at_ms,
    })
}

/// Check both collections. The cache is trusted only as a whole.
pub fn check(
    storage: &dyn KeyValueStore,
    now: DateTime<Utc>,
    window: Duration,
) -> CacheDecision {
    let blog = read_entry(storage, Collection::Blog).filter(|e| e.is_fresh(now, window));
    let hub = read_entry(storage, Collection::Hub).filter(|e| e.is_fresh(now, window));

    match (blog, hub) {
        (Some(blog), Some(hub)) => CacheDecision::Hydrate {
            blog: blog.records,
            hub: hub.records,
        },
        _ => CacheDecision::Refetch,
    }
}
