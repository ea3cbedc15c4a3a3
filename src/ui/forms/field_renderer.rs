//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    draw_input(
        frame,
        area,
        field.spec.label,
        field.value(),
        field.spec.placeholder.unwrap_or(""),
        is_active,
        field.error(),
    );
}

/// Draw a labelled single-line input with an optional inline error
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if value.is_empty() && !is_active {
        let hint = if placeholder.is_empty() {
            "(empty)"
        } else {
            placeholder
        };
        Paragraph::new(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {message} "),
                Style::default().fg(Color::Red),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(content.block(block), area);
}
