//! Form rendering module
//!
//! This module contains UI components for rendering the wizard:
//! - `field_renderer`: field and input rendering utilities
//! - `contact_step` / `business_step` / `details_step`: the three pages
//! - `list_editor`: the repeatable collection widget
//! - `nav`: the step navigation button row

mod business_step;
mod contact_step;
mod details_step;
mod field_renderer;
mod list_editor;
mod nav;

use crate::app::App;
use crate::state::StepPage;
use ratatui::{layout::Rect, Frame};

/// Draw the wizard page currently on screen
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    match app.state.wizard.page() {
        StepPage::Contact(page) => contact_step::draw(frame, area, page),
        StepPage::Business(page) => {
            business_step::draw(frame, area, page, app.state.wizard.selected_type());
        }
        StepPage::Details(page) => {
            details_step::draw(frame, area, page, app.state.wizard.selected_type());
        }
    }
}
