// App state and main event loop.
// Applies fetch results, handles search input, and copies links.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::articles::{ArticleRecord, Collection};
use crate::clipboard::Clipboard;
use crate::state::{ArticlesState, SearchState, SearchView, Toast, filter, merge};
use crate::ui;

/// Message shown after a link is copied.
pub const COPIED_MESSAGE: &str = "😀 Link Copied!!";

/// Results delivered to the UI loop by background tasks.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ArticlesLoading(Collection),
    ArticlesLoaded(Collection, Vec<ArticleRecord>),
    ArticlesFailed(Collection, String),
    LastUpdated(String),
}

/// Main application state.
pub struct App {
    pub articles: ArticlesState,
    pub search: SearchState,
    /// Visible notification, if any.
    pub toast: Option<Toast>,
    /// Whether the app should exit.
    pub should_quit: bool,
    clipboard: Box<dyn Clipboard>,
    events: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(clipboard: Box<dyn Clipboard>, events: UnboundedReceiver<AppEvent>) -> Self {
        Self {
            articles: ArticlesState::new(),
            search: SearchState::new(),
            toast: None,
            should_quit: false,
            clipboard,
            events,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.drain_events();
            self.expire_toast(Instant::now());
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Apply every event background tasks have posted so far.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::ArticlesLoading(collection) => self.articles.set_loading(collection),
            AppEvent::ArticlesLoaded(collection, records) => {
                debug!(collection = collection.name(), count = records.len(), "articles ready");
                self.articles.set_loaded(collection, records);
            }
            AppEvent::ArticlesFailed(collection, error) => {
                self.articles.set_failed(collection, error);
            }
            AppEvent::LastUpdated(date) => self.articles.last_updated = date,
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.search.clear(),
            KeyCode::Char('y') if ctrl => self.copy_selected(Instant::now()),
            KeyCode::Enter => self.copy_selected(Instant::now()),
            KeyCode::Down => {
                let len = self.results().len();
                self.search.select_next(len);
            }
            KeyCode::Up => {
                let len = self.results().len();
                self.search.select_prev(len);
            }
            KeyCode::Backspace => self.search.pop(),
            KeyCode::Char(c) if !ctrl => self.search.push(c),
            _ => {}
        }
    }

    /// Merged records matching the current query.
    pub fn results(&self) -> Vec<&ArticleRecord> {
        let merged = merge(
            self.articles.records(Collection::Hub),
            self.articles.records(Collection::Blog),
        );
        filter(&merged, &self.search.query)
    }

    pub fn view(&self) -> SearchView {
        SearchView::select(&self.search.query, self.results().len())
    }

    /// Copy the selected result's link; no-op outside the results view.
    pub fn copy_selected(&mut self, now: Instant) {
        if self.view() != SearchView::Results {
            return;
        }
        let link = {
            let results = self.results();
            self.search
                .selected(results.len())
                .and_then(|i| results.get(i))
                .map(|record| record.link.clone())
        };

        if let Some(link) = link {
            self.copy_link(&link, now);
        }
    }

    /// Put `link` on the clipboard and show a confirmation.
    pub fn copy_link(&mut self, link: &str, now: Instant) {
        if let Err(e) = self.clipboard.copy(link) {
            warn!(error = %e, "clipboard copy failed");
        }
        self.toast = Some(Toast::new(COPIED_MESSAGE, now));
    }

    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }
}
