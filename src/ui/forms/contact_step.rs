//! Contact details step

use super::field_renderer::draw_field;
use super::nav::draw_nav_row;
use crate::state::{ContactPage, Page};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, page: &ContactPage) {
    let block = Block::default()
        .title(" Contact Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = page
        .fields
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (index, field) in page.fields.iter().enumerate() {
        draw_field(frame, chunks[index], field, page.focus() == index);
    }

    draw_nav_row(
        frame,
        chunks[page.fields.len()],
        &page.nav,
        page.is_nav_focused(),
    );
}
