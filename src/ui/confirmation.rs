//! Terminal confirmation view shown after a successful submission

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Application Submitted!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Thank you for your application. Our team will review it"),
        Line::from("and contact you within 2-3 business days."),
    ];

    if let Some(reference) = &app.state.submission_reference {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("Reference: {reference}"),
            Style::default().fg(Color::Cyan),
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Press Enter to submit another application",
        Style::default().fg(Color::DarkGray),
    )));

    let height = content.len() as u16 + 2;
    let width = 60.min(area.width);
    let card_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height: height.min(area.height),
    };

    let card = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(card, card_area);
}
