// Article collection loader.
// Fetches a collection ordered by creation time, normalizes it, and writes it through to the cache.

use chrono::Utc;
use tracing::info;

use crate::context::ClientContext;
use crate::error::Result;
use crate::firestore::CollectionQuery;

use super::types::{ArticleRecord, CREATED_AT_FIELD, Collection, normalize};

/// Fetch `collection` from the document store and persist it.
///
/// Errors (transport, HTTP status, malformed record, cache write) are
/// returned to the caller; nothing is cached on failure.
pub async fn load_collection(
    ctx: &ClientContext,
    collection: Collection,
) -> Result<Vec<ArticleRecord>> {
    let query = CollectionQuery::ordered_by(collection.name(), CREATED_AT_FIELD);
    let documents = ctx.documents.list(&query).await?;

    let records = documents
        .iter()
        .map(|doc| normalize(collection, doc))
        .collect::<Result<Vec<_>>>()?;

    ctx.storage
        .set(collection.name(), &serde_json::to_string(&records)?)?;
    ctx.storage.set(
        &collection.timestamp_key(),
        &Utc::now().timestamp_millis().to_string(),
    )?;

    info!(
        collection = collection.name(),
        count = records.len(),
        "loaded articles"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{KeyValueStore, MemoryStore};
    use crate::firestore::mock::{MockDocumentStore, article_doc};
    use std::sync::Arc;

    fn context(
        documents: MockDocumentStore,
    ) -> (ClientContext, Arc<MockDocumentStore>, Arc<MemoryStore>) {
        let documents = Arc::new(documents);
        let storage = Arc::new(MemoryStore::new());
        let ctx = ClientContext::new(documents.clone(), storage.clone());
        (ctx, documents, storage)
    }

    #[tokio::test]
    async fn test_load_preserves_order_and_writes_cache() {
        let (ctx, documents, storage) = context(MockDocumentStore::new().with_collection(
            "blog",
            vec![
                article_doc("blog", "b1", "First", "2024-01-01T00:00:00Z"),
                article_doc("blog", "b2", "Second", "2024-02-01T00:00:00Z"),
            ],
        ));

        let before = Utc::now().timestamp_millis();
        let records = load_collection(&ctx, Collection::Blog).await.unwrap();
        let after = Utc::now().timestamp_millis();

        let ids: Vec<&str> = records.iter().map(|r| r.article_id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2"]);

        assert_eq!(
            documents.queries(),
            vec![CollectionQuery::ordered_by("blog", "createdAt")]
        );

        let cached: Vec<ArticleRecord> =
            serde_json::from_str(&storage.get("blog").unwrap().unwrap()).unwrap();
        assert_eq!(cached, records);

        let stamp: i64 = storage
            .get("blog_timestamp")
            .unwrap()
            .unwrap()
            .parse()
            .unwrap();
        assert!(stamp >= before && stamp <= after);
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_cache_untouched() {
        let (ctx, _, storage) = context(MockDocumentStore::new().failing("hub"));

        assert!(load_collection(&ctx, Collection::Hub).await.is_err());
        assert_eq!(storage.get("hub").unwrap(), None);
        assert_eq!(storage.get("hub_timestamp").unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_record_fails_whole_collection() {
        let mut bad = article_doc("hub", "h2", "Bad", "2024-01-01T00:00:00Z");
        bad.fields.remove("createdAt");
        let (ctx, _, storage) = context(MockDocumentStore::new().with_collection(
            "hub",
            vec![article_doc("hub", "h1", "Good", "2024-01-01T00:00:00Z"), bad],
        ));

        let err = load_collection(&ctx, Collection::Hub).await.unwrap_err();
        assert!(matches!(err, crate::error::ArticlesError::MalformedRecord { .. }));
        assert_eq!(storage.get("hub").unwrap(), None);
    }
}
