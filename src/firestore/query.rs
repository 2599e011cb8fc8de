// Firestore structured queries.
// Builds runQuery request bodies and unwraps the streamed response array.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

use super::client::FirestoreClient;
use super::types::Document;
use super::DocumentStore;

/// Query for every document in one collection, optionally ordered by a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    pub collection: String,
    pub order_by: Option<String>,
}

impl CollectionQuery {
    /// All documents in natural (document id) order.
    pub fn all(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            order_by: None,
        }
    }

    /// All documents ordered ascending by `field`.
    pub fn ordered_by(collection: &str, field: &str) -> Self {
        Self {
            collection: collection.to_string(),
            order_by: Some(field.to_string()),
        }
    }

    fn to_request(&self) -> RunQueryRequest<'_> {
        RunQueryRequest {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: &self.collection,
                }],
                order_by: self
                    .order_by
                    .iter()
                    .map(|field| Order {
                        field: FieldReference { field_path: field },
                        direction: "ASCENDING",
                    })
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunQueryRequest<'a> {
    structured_query: StructuredQuery<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StructuredQuery<'a> {
    from: Vec<CollectionSelector<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    order_by: Vec<Order<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector<'a> {
    collection_id: &'a str,
}

#[derive(Debug, Serialize)]
struct Order<'a> {
    field: FieldReference<'a>,
    direction: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference<'a> {
    field_path: &'a str,
}

/// One element of the runQuery response array.
/// Elements without a document only carry progress metadata.
#[derive(Debug, Deserialize)]
struct RunQueryResponse {
    document: Option<Document>,
}

impl FirestoreClient {
    /// Run a collection query and return the matching documents in query order.
    pub async fn run_query(&self, query: &CollectionQuery) -> Result<Vec<Document>> {
        let response = self.post(":runQuery", &query.to_request()).await?;
        let results: Vec<RunQueryResponse> = response.json().await?;
        let documents: Vec<Document> = results.into_iter().filter_map(|r| r.document).collect();
        debug!(
            collection = %query.collection,
            count = documents.len(),
            "query returned documents"
        );
        Ok(documents)
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn list(&self, query: &CollectionQuery) -> Result<Vec<Document>> {
        self.run_query(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ordered_request_body() {
        let query = CollectionQuery::ordered_by("blog", "createdAt");
        let body = serde_json::to_value(query.to_request()).unwrap();

        assert_eq!(
            body,
            json!({
                "structuredQuery": {
                    "from": [{"collectionId": "blog"}],
                    "orderBy": [{"field": {"fieldPath": "createdAt"}, "direction": "ASCENDING"}]
                }
            })
        );
    }

    #[test]
    fn test_unordered_request_body() {
        let body = serde_json::to_value(CollectionQuery::all("lastUpdated").to_request()).unwrap();

        assert_eq!(
            body,
            json!({"structuredQuery": {"from": [{"collectionId": "lastUpdated"}]}})
        );
    }

    #[test]
    fn test_response_skips_metadata_entries() {
        let wire = json!([
            {"readTime": "2024-01-01T00:00:00Z"},
            {
                "document": {
                    "name": "projects/p/databases/(default)/documents/hub/a",
                    "fields": {"title": {"stringValue": "A"}}
                },
                "readTime": "2024-01-01T00:00:00Z"
            }
        ]);

        let results: Vec<RunQueryResponse> = serde_json::from_value(wire).unwrap();
        let documents: Vec<Document> = results.into_iter().filter_map(|r| r.document).collect();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id(), "a");
    }
}
