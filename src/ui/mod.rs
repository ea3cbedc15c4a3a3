//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, main_area) = layout::create_layout(area);

    layout::draw_progress(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Wizard => forms::draw_step(frame, main_area, app),
        View::Submitted => confirmation::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Notices overlay everything until dismissed
    if let Some(notice) = app.state.current_notice() {
        components::render_notice(frame, notice);
    }
}
