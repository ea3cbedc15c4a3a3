//! Business type selection step

use super::nav::draw_nav_row;
use crate::state::{BusinessPage, BusinessSlot, BusinessType};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_HEIGHT: u16 = 4;

pub fn draw(frame: &mut Frame, area: Rect, page: &BusinessPage, selected: Option<BusinessType>) {
    let block = Block::default()
        .title(" Select Business Type ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = BusinessType::ALL
        .iter()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let cards_focused = page.focused_slot() == BusinessSlot::Cards;
    for (index, business_type) in BusinessType::ALL.iter().enumerate() {
        draw_card(
            frame,
            chunks[index],
            *business_type,
            cards_focused && page.highlighted == index,
            selected == Some(*business_type),
        );
    }

    draw_nav_row(
        frame,
        chunks[BusinessType::ALL.len()],
        &page.nav,
        page.focused_slot() == BusinessSlot::Nav,
    );
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    business_type: BusinessType,
    is_highlighted: bool,
    is_selected: bool,
) {
    let border_style = if is_highlighted {
        Style::default().fg(Color::Cyan)
    } else if is_selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let marker = if is_selected { "● " } else { "○ " };
    let marker_style = if is_selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title_style = if is_highlighted {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let content = vec![
        Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(business_type.display_name(), title_style),
        ]),
        Line::from(Span::styled(
            format!("  {}", business_type.description()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
