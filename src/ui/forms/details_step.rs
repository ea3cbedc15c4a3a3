//! Details step: variant-specific fields plus both collection editors

use super::field_renderer::draw_field;
use super::list_editor::{draw_list_editor, editor_height};
use super::nav::draw_nav_row;
use crate::state::{BusinessType, DetailsPage, DetailsSlot};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, page: &DetailsPage, selected: Option<BusinessType>) {
    let title = match selected {
        Some(business_type) => format!(" {} Details ", business_type.display_name()),
        None => " Details ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = page
        .fields
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(editor_height(&page.pharmacies)));
    constraints.push(Constraint::Length(editor_height(&page.pharmacists)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let focused = page.focused_slot();

    for (index, field) in page.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            field,
            focused == DetailsSlot::Field(index),
        );
    }

    let pharmacies_chunk = chunks[page.fields.len()];
    let pharmacy_input = match focused {
        DetailsSlot::PharmacyInput(input) => Some(input),
        _ => None,
    };
    draw_list_editor(frame, pharmacies_chunk, &page.pharmacies, pharmacy_input);

    let pharmacists_chunk = chunks[page.fields.len() + 1];
    let pharmacist_input = match focused {
        DetailsSlot::PharmacistInput(input) => Some(input),
        _ => None,
    };
    draw_list_editor(frame, pharmacists_chunk, &page.pharmacists, pharmacist_input);

    draw_nav_row(
        frame,
        chunks[page.fields.len() + 2],
        &page.nav,
        focused == DetailsSlot::Nav,
    );
}
