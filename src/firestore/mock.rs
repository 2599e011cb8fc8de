// In-memory document store for tests.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ArticlesError, Result};

use super::{CollectionQuery, Document, DocumentStore, Value};

/// Serves canned documents per collection and records every query.
#[derive(Debug, Default)]
pub struct MockDocumentStore {
    collections: HashMap<String, Vec<Document>>,
    failing: HashSet<String>,
    queries: Mutex<Vec<CollectionQuery>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `documents` (already in query order) for `collection`.
    pub fn with_collection(mut self, collection: &str, documents: Vec<Document>) -> Self {
        self.collections.insert(collection.to_string(), documents);
        self
    }

    /// Fail every query against `collection`.
    pub fn failing(mut self, collection: &str) -> Self {
        self.failing.insert(collection.to_string());
        self
    }

    /// Queries received so far.
    pub fn queries(&self) -> Vec<CollectionQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn list(&self, query: &CollectionQuery) -> Result<Vec<Document>> {
        self.queries.lock().unwrap().push(query.clone());

        if self.failing.contains(&query.collection) {
            return Err(ArticlesError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }

        Ok(self
            .collections
            .get(&query.collection)
            .cloned()
            .unwrap_or_default())
    }
}

/// An article-shaped document.
pub fn article_doc(collection: &str, id: &str, title: &str, created_at: &str) -> Document {
    let fields = BTreeMap::from([
        ("title".to_string(), Value::string(title)),
        (
            "link".to_string(),
            Value::string(format!("https://example.com/{}", id)),
        ),
        ("category".to_string(), Value::string("General")),
        ("createdAt".to_string(), Value::timestamp(created_at)),
    ]);
    Document::new(collection, id, fields)
}
