// Remote document store module.
// Provides the store abstraction and its Firestore REST implementation.

pub mod client;
#[cfg(test)]
pub mod mock;
pub mod query;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use client::FirestoreClient;
pub use query::CollectionQuery;
pub use types::{Document, Value};

/// Read access to a remote collection-of-documents store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return every document matching the query, in query order.
    async fn list(&self, query: &CollectionQuery) -> Result<Vec<Document>>;
}
