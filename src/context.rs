// Shared handles to the document store and local cache.

use std::sync::Arc;

use crate::cache::KeyValueStore;
use crate::firestore::DocumentStore;

/// Process-wide client handles, built once at startup and passed explicitly.
#[derive(Clone)]
pub struct ClientContext {
    pub documents: Arc<dyn DocumentStore>,
    pub storage: Arc<dyn KeyValueStore>,
}

impl ClientContext {
    pub fn new(documents: Arc<dyn DocumentStore>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self { documents, storage }
    }
}
