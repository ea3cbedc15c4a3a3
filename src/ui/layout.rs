//! Layout components (wizard progress header, status bar)

use crate::app::App;
use crate::state::{DetailsSlot, Step, StepPage, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the progress header, the content area, and a
/// bottom status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the three-step progress indicator
pub fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.wizard.step_index();
    let submitted = app.state.current_view == View::Submitted;

    let mut spans = vec![Span::raw(" ")];
    for (index, step) in Step::ALL.iter().enumerate() {
        let completed = submitted || index < current;
        let active = !submitted && index == current;

        let (marker, style) = if completed {
            ("✓", Style::default().fg(Color::Green))
        } else if active {
            ("●", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };

        spans.push(Span::styled(format!("{marker} {}", step.label()), style));
        if index + 1 < Step::ALL.len() {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
    }

    let header = Paragraph::new(Line::from(spans)).style(Style::default());
    let inner = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 1,
    };
    frame.render_widget(header, inner);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.transport_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    // Context hints
    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::DarkGray),
    ));

    // Accept mode indicator
    if let Some(id) = app.application_id() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("accepting {id}"),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view and focus
fn get_hints(app: &App) -> String {
    if app.state.current_view == View::Submitted {
        return "Enter:new application  q:quit".to_string();
    }

    match app.state.wizard.page() {
        StepPage::Contact(_) => "Tab:next field  Enter:advance  ←/→:buttons".to_string(),
        StepPage::Business(_) => {
            "↑/↓:choose type  Space/Enter:select  Tab:buttons  Esc:back".to_string()
        }
        StepPage::Details(page) => match page.focused_slot() {
            DetailsSlot::PharmacyInput(_) | DetailsSlot::PharmacistInput(_) => {
                "Enter:add  ↑/↓:select item  Del:remove  Tab:next field".to_string()
            }
            _ => "Tab:next field  Enter:advance  Esc:back".to_string(),
        },
    }
}
