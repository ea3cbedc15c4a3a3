//! Notice overlay, the terminal stand-in for a toast

use crate::state::{Notice, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a notice centered on the screen; dismissed with Enter or Esc
pub fn render_notice(frame: &mut Frame, notice: &Notice) {
    let area = frame.area();

    let (title, color) = match notice.severity {
        Severity::Info => ("Info", Color::Blue),
        Severity::Success => ("Success", Color::Green),
        Severity::Error => ("Error", Color::Red),
    };

    let width = (notice.message.len() as u16 + 6)
        .max(title.len() as u16 + 6)
        .max(30)
        .min(area.width.saturating_sub(4));
    let height = 6;

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let content = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(notice.message.clone()),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}
