// Header bar with the directory title and the last-updated date.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

/// Draw the header at the top of the screen.
pub fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(20)])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        " Articles Directory",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let updated = Paragraph::new(Span::styled(
        format!("{} ", app.articles.last_updated),
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(updated, chunks[1]);
}
