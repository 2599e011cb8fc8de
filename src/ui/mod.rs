// UI module for rendering the TUI.
// Contains the header, search box, results table, status bar, and toast.

mod header;
mod table;
mod toast;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::articles::Collection;
use crate::state::{LoadingState, SearchView, filter, merge};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::draw_header(frame, app, chunks[0]);
    draw_search_input(frame, app, chunks[1]);
    draw_content(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Toast (rendered last, on top of everything)
    if let Some(toast) = &app.toast {
        toast::draw_toast(frame, toast);
    }
}

/// Draw the search box with a cursor block.
fn draw_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Search ");

    let input = Line::from(vec![
        Span::raw(app.search.query.as_str()),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);

    frame.render_widget(Paragraph::new(input).block(block), area);
}

/// Draw whichever of the welcome, results, or empty views applies.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let merged = merge(
        app.articles.records(Collection::Hub),
        app.articles.records(Collection::Blog),
    );
    let results = filter(&merged, &app.search.query);

    match SearchView::select(&app.search.query, results.len()) {
        SearchView::Idle => table::render_welcome(frame, area),
        SearchView::EmptyResult => {
            table::render_empty(frame, area, "No articles found for the search query.")
        }
        SearchView::Results => {
            let selected = app.search.selected(results.len());
            app.search.table_state.select(selected);
            table::render_results(frame, &results, &mut app.search.table_state, area);
        }
    }
}

/// Draw the status bar with keybinding hints and load progress.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Select", Style::default().fg(Color::DarkGray)),
        Span::raw("  Enter "),
        Span::styled("Copy link", Style::default().fg(Color::DarkGray)),
        Span::raw("  Ctrl+U "),
        Span::styled("Clear", Style::default().fg(Color::DarkGray)),
        Span::raw("  Esc "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    for collection in [Collection::Hub, Collection::Blog] {
        let (text, color) = match app.articles.get(collection) {
            LoadingState::Idle => continue,
            LoadingState::Loading => (format!("⏳ {}", collection.name()), Color::Yellow),
            LoadingState::Loaded(records) => {
                (format!("{} {}", collection.name(), records.len()), Color::Green)
            }
            LoadingState::Error(_) => (format!("❌ {}", collection.name()), Color::Red),
        };
        spans.push(Span::raw("  │ "));
        spans.push(Span::styled(text, Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
