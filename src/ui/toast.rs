// Toast overlay drawn in the bottom-right corner.

use ratatui::{prelude::*, widgets::*};

use crate::state::Toast;

/// Box width for a message: display columns plus border and padding.
fn toast_width(message: &str, max: u16) -> u16 {
    (Line::from(message).width() as u16 + 6).min(max)
}

/// Draw a toast on top of the current view.
pub fn draw_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();

    let width = toast_width(&toast.message, area.width);
    let height = area.height.min(3);
    let x = area.width.saturating_sub(width + 1);
    // Keep clear of the status bar.
    let y = area.height.saturating_sub(height + 1);

    let toast_area = Rect::new(x, y, width, height);

    // Clear the area behind the toast
    frame.render_widget(Clear, toast_area);

    let widget = Paragraph::new(toast.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(widget, toast_area);
}
