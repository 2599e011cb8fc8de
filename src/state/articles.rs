// Article collections held by the UI.
// Tracks each collection's load progress and the last-updated label.

use crate::articles::{ArticleRecord, Collection};

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Both collections plus the header date.
#[derive(Debug, Default)]
pub struct ArticlesState {
    pub blog: LoadingState<Vec<ArticleRecord>>,
    pub hub: LoadingState<Vec<ArticleRecord>>,
    /// Human-readable date of the last data update; empty until fetched.
    pub last_updated: String,
}

impl ArticlesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, collection: Collection) -> &LoadingState<Vec<ArticleRecord>> {
        match collection {
            Collection::Blog => &self.blog,
            Collection::Hub => &self.hub,
        }
    }

    fn get_mut(&mut self, collection: Collection) -> &mut LoadingState<Vec<ArticleRecord>> {
        match collection {
            Collection::Blog => &mut self.blog,
            Collection::Hub => &mut self.hub,
        }
    }

    pub fn set_loading(&mut self, collection: Collection) {
        *self.get_mut(collection) = LoadingState::Loading;
    }

    pub fn set_loaded(&mut self, collection: Collection, records: Vec<ArticleRecord>) {
        *self.get_mut(collection) = LoadingState::Loaded(records);
    }

    /// A failed fetch keeps previously loaded records.
    pub fn set_failed(&mut self, collection: Collection, error: String) {
        let slot = self.get_mut(collection);
        if slot.data().is_none() {
            *slot = LoadingState::Error(error);
        }
    }

    /// Records of a collection, empty unless loaded.
    pub fn records(&self, collection: Collection) -> &[ArticleRecord] {
        self.get(collection).data().map(Vec::as_slice).unwrap_or(&[])
    }
}
