// Article record schema and collection names.
// Normalizes store documents into validated records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;

use crate::error::{ArticlesError, Result};
use crate::firestore::Document;

/// Field every article collection is ordered by.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// The article collections shown in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Blog,
    Hub,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Blog, Collection::Hub];

    /// Collection name in the document store, also its cache key.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Hub => "hub",
        }
    }

    /// Cache key holding the fetch time in epoch milliseconds.
    pub fn timestamp_key(&self) -> String {
        format!("{}_timestamp", self.name())
    }
}

/// A single article as shown in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Identifier of the source document, unique within its collection.
    pub article_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    pub link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    pub created_at: DateTime<Utc>,
    /// Body fields outside the schema, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Json>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Attach the document id to its body and validate the result.
/// The id always wins over an `articleId` stored in the body.
pub fn normalize(collection: Collection, doc: &Document) -> Result<ArticleRecord> {
    let mut body = doc.body();
    body.insert("articleId".to_string(), Json::String(doc.id().to_string()));

    serde_json::from_value(Json::Object(body)).map_err(|e| ArticlesError::MalformedRecord {
        collection: collection.name().to_string(),
        id: doc.id().to_string(),
        reason: e.to_string(),
    })
}
