// Results table and simple content-state renderers.

use ratatui::{prelude::*, widgets::*};

use crate::articles::ArticleRecord;

/// Render a centered, dimmed message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the welcome text shown while the search box is blank.
pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to the Articles Directory!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter your search query above to find articles.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

/// Render the matching articles, one row each.
pub fn render_results(
    frame: &mut Frame,
    results: &[&ArticleRecord],
    table_state: &mut TableState,
    area: Rect,
) {
    let header = Row::new(["Title", "Article Link", "Category", "Copy Link"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = results
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.title.as_str()),
                Cell::from(Span::styled(
                    record.link.as_str(),
                    Style::default().fg(Color::Cyan),
                )),
                Cell::from(Span::styled(
                    record.category.as_str(),
                    Style::default().fg(Color::DarkGray),
                )),
                Cell::from("⧉ copy"),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(30),
        Constraint::Percentage(12),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Articles ({}) ", results.len())),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, table_state);
}
