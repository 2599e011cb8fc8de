// Search state and filtering.
// Merges the collections, filters by title, and picks which view to show.

use ratatui::widgets::TableState;

use crate::articles::ArticleRecord;

/// Which of the three content views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchView {
    /// Query is blank: welcome message, no table.
    Idle,
    /// Query matched at least one article.
    Results,
    /// Query matched nothing.
    EmptyResult,
}

impl SearchView {
    /// Select the view from the raw query and the number of matches.
    pub fn select(query: &str, match_count: usize) -> Self {
        if query.trim().is_empty() {
            SearchView::Idle
        } else if match_count > 0 {
            SearchView::Results
        } else {
            SearchView::EmptyResult
        }
    }
}

/// Hub records followed by blog records, each in query order.
pub fn merge<'a>(hub: &'a [ArticleRecord], blog: &'a [ArticleRecord]) -> Vec<&'a ArticleRecord> {
    hub.iter().chain(blog.iter()).collect()
}

/// Records whose title contains `query`, ignoring case.
/// Records with an empty title never match a non-empty query.
pub fn filter<'a>(merged: &[&'a ArticleRecord], query: &str) -> Vec<&'a ArticleRecord> {
    let needle = query.to_lowercase();
    merged
        .iter()
        .copied()
        .filter(|record| !record.title.is_empty() || needle.is_empty())
        .filter(|record| record.title.to_lowercase().contains(&needle))
        .collect()
}

/// Search box contents and the selected result row.
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub table_state: TableState,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.reset_selection();
    }

    pub fn pop(&mut self) {
        self.query.pop();
        self.reset_selection();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.reset_selection();
    }

    /// Currently selected row, clamped to `len` results.
    pub fn selected(&self, len: usize) -> Option<usize> {
        match self.table_state.selected() {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None if len > 0 => Some(0),
            None => None,
        }
    }

    /// Move selection down, wrapping to the first row.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected(len) {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Move selection up, wrapping to the last row.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected(len) {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn reset_selection(&mut self) {
        self.table_state.select(None);
        *self.table_state.offset_mut() = 0;
    }
}
