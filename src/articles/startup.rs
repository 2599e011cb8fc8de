// Startup sequence: cache gate, collection loads, and the last-updated fetch.
// Results reach the UI loop as events; nothing here touches UI state directly.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::app::AppEvent;
use crate::context::ClientContext;

use super::gate::{self, CacheDecision};
use super::loader::load_collection;
use super::marker::{display_date, fetch_last_updated};
use super::types::Collection;

/// Run the cache gate once and start whatever fetches it calls for.
///
/// Returns the spawned task handles. A fresh cache is delivered
/// immediately without any network call.
pub fn mount(
    ctx: &ClientContext,
    window: Duration,
    events: &UnboundedSender<AppEvent>,
) -> Vec<JoinHandle<()>> {
    let mut tasks = Vec::new();

    match gate::check(ctx.storage.as_ref(), Utc::now(), window) {
        CacheDecision::Hydrate { blog, hub } => {
            info!(blog = blog.len(), hub = hub.len(), "hydrating from cache");
            let _ = events.send(AppEvent::ArticlesLoaded(Collection::Blog, blog));
            let _ = events.send(AppEvent::ArticlesLoaded(Collection::Hub, hub));
        }
        CacheDecision::Refetch => {
            info!("cache stale or missing, fetching collections");
            for collection in Collection::ALL {
                let _ = events.send(AppEvent::ArticlesLoading(collection));
                tasks.push(spawn_load(ctx.clone(), collection, events.clone()));
            }
        }
    }

    tasks.push(spawn_last_updated(ctx.clone(), events.clone()));
    tasks
}

fn spawn_load(
    ctx: ClientContext,
    collection: Collection,
    events: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let event = match load_collection(&ctx, collection).await {
            Ok(records) => AppEvent::ArticlesLoaded(collection, records),
            Err(e) => {
                error!(collection = collection.name(), error = %e, "failed to load articles");
                AppEvent::ArticlesFailed(collection, e.to_string())
            }
        };
        // The receiver is gone once the UI has exited.
        let _ = events.send(event);
    })
}

fn spawn_last_updated(ctx: ClientContext, events: UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match fetch_last_updated(ctx.documents.as_ref()).await {
            Ok(Some(created_at)) => {
                let _ = events.send(AppEvent::LastUpdated(display_date(&created_at)));
            }
            Ok(None) => warn!("no lastUpdated marker document"),
            Err(e) => error!(error = %e, "error retrieving lastUpdated"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::gate::FRESHNESS_WINDOW;
    use crate::articles::marker::LAST_UPDATED_COLLECTION;
    use crate::articles::types::ArticleRecord;
    use crate::cache::{KeyValueStore, MemoryStore};
    use crate::firestore::mock::{MockDocumentStore, article_doc};
    use crate::firestore::{Document, Value};
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn store_with_articles() -> MockDocumentStore {
        MockDocumentStore::new()
            .with_collection(
                "blog",
                vec![article_doc("blog", "b1", "Intro to Go", "2024-01-01T00:00:00Z")],
            )
            .with_collection(
                "hub",
                vec![article_doc("hub", "h1", "Intro to Rust", "2024-01-01T00:00:00Z")],
            )
            .with_collection(
                LAST_UPDATED_COLLECTION,
                vec![Document::new(
                    LAST_UPDATED_COLLECTION,
                    "m",
                    BTreeMap::from([(
                        "createdAt".to_string(),
                        Value::timestamp("2024-03-06T12:00:00Z"),
                    )]),
                )],
            )
    }

    async fn drain(
        tasks: Vec<JoinHandle<()>>,
        rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    ) -> Vec<AppEvent> {
        for task in tasks {
            task.await.unwrap();
        }
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn loaded(events: &[AppEvent], collection: Collection) -> Option<&Vec<ArticleRecord>> {
        events.iter().find_map(|e| match e {
            AppEvent::ArticlesLoaded(c, records) if *c == collection => Some(records),
            _ => None,
        })
    }

    #[tokio::test]
    async fn test_empty_cache_fetches_both_collections() {
        let documents = Arc::new(store_with_articles());
        let storage = Arc::new(MemoryStore::new());
        let ctx = ClientContext::new(documents.clone(), storage.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let tasks = mount(&ctx, FRESHNESS_WINDOW, &tx);
        let events = drain(tasks, &mut rx).await;

        let mut collections: Vec<String> =
            documents.queries().into_iter().map(|q| q.collection).collect();
        collections.sort();
        assert_eq!(collections, ["blog", "hub", "lastUpdated"]);

        assert_eq!(loaded(&events, Collection::Blog).unwrap()[0].article_id, "b1");
        assert_eq!(loaded(&events, Collection::Hub).unwrap()[0].article_id, "h1");
        assert!(storage.get("blog_timestamp").unwrap().is_some());
        assert!(storage.get("hub_timestamp").unwrap().is_some());
        assert!(events.iter().any(|e| matches!(e, AppEvent::LastUpdated(_))));
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_article_fetches() {
        let documents = Arc::new(store_with_articles());
        let storage = Arc::new(MemoryStore::new());
        let ctx = ClientContext::new(documents.clone(), storage.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();

        // First mount populates the cache.
        let tasks = mount(&ctx, FRESHNESS_WINDOW, &tx);
        drain(tasks, &mut rx).await;

        let documents2 = Arc::new(store_with_articles());
        let ctx2 = ClientContext::new(documents2.clone(), storage.clone());
        let tasks = mount(&ctx2, FRESHNESS_WINDOW, &tx);
        let events = drain(tasks, &mut rx).await;

        let collections: Vec<String> =
            documents2.queries().into_iter().map(|q| q.collection).collect();
        assert_eq!(collections, ["lastUpdated"]);
        assert_eq!(loaded(&events, Collection::Hub).unwrap()[0].title, "Intro to Rust");
    }

    #[tokio::test]
    async fn test_stale_cache_refetches_well_formed_payload() {
        let documents = Arc::new(store_with_articles());
        let storage = Arc::new(MemoryStore::new());
        let stale = (Utc::now().timestamp_millis() - 25 * 60 * 60 * 1000).to_string();
        storage.set("blog", "[]").unwrap();
        storage.set("hub", "[]").unwrap();
        storage.set("blog_timestamp", &stale).unwrap();
        storage.set("hub_timestamp", &stale).unwrap();

        let ctx = ClientContext::new(documents.clone(), storage.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let events = drain(mount(&ctx, FRESHNESS_WINDOW, &tx), &mut rx).await;

        let mut collections: Vec<String> =
            documents.queries().into_iter().map(|q| q.collection).collect();
        collections.sort();
        assert_eq!(collections, ["blog", "hub", "lastUpdated"]);
        assert_eq!(loaded(&events, Collection::Blog).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_one_failing_collection_does_not_block_the_other() {
        let documents = Arc::new(
            store_with_articles()
                .failing("blog")
                .failing(LAST_UPDATED_COLLECTION),
        );
        let storage = Arc::new(MemoryStore::new());
        let ctx = ClientContext::new(documents, storage.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let events = drain(mount(&ctx, FRESHNESS_WINDOW, &tx), &mut rx).await;

        assert!(loaded(&events, Collection::Blog).is_none());
        assert!(
            events
                .iter()
                .any(|e| matches!(e, AppEvent::ArticlesFailed(Collection::Blog, _)))
        );
        assert_eq!(loaded(&events, Collection::Hub).unwrap().len(), 1);
        assert!(!events.iter().any(|e| matches!(e, AppEvent::LastUpdated(_))));
        assert_eq!(storage.get("blog").unwrap(), None);
    }
}
