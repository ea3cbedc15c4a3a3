//! Navigation button row shared by the wizard steps

use crate::state::{NavAction, NavRow};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

fn accent(action: NavAction) -> Color {
    match action {
        NavAction::Back => Color::Gray,
        NavAction::Next => Color::Cyan,
        NavAction::Submit => Color::Green,
    }
}

/// Draw the nav row: a lone primary button sits on the right, otherwise
/// Back goes left and the primary action right
pub fn draw_nav_row(frame: &mut Frame, area: Rect, nav: &NavRow, is_focused: bool) {
    let width = |action: NavAction| action.label().len() as u16 + 4;

    if nav.buttons.len() == 1 {
        let action = nav.buttons[0];
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(width(action))])
            .split(area);
        render_button(frame, chunks[1], action.label(), is_focused, accent(action));
        return;
    }

    let first = nav.buttons[0];
    let last = nav.buttons[nav.buttons.len() - 1];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(width(first)),
            Constraint::Min(0),
            Constraint::Length(width(last)),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        first.label(),
        is_focused && nav.selected == 0,
        accent(first),
    );
    render_button(
        frame,
        chunks[2],
        last.label(),
        is_focused && nav.selected == nav.buttons.len() - 1,
        accent(last),
    );
}
