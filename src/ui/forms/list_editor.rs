//! Generic list-editor widget: added item rows plus the candidate input row

use super::field_renderer::draw_input;
use crate::state::{ItemSchema, ListEditor};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed to draw the editor: borders, item lines (or the empty
/// hint), and the bordered input row
pub fn editor_height<S: ItemSchema>(editor: &ListEditor<S>) -> u16 {
    editor.count().max(1) as u16 + 5
}

pub fn draw_list_editor<S: ItemSchema>(
    frame: &mut Frame,
    area: Rect,
    editor: &ListEditor<S>,
    active_input: Option<usize>,
) {
    let focused = active_input.is_some();
    let block = Block::default()
        .title(format!(" {} ", S::ID.label()))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let item_rows = editor.count().max(1) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(item_rows),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    if editor.count() == 0 {
        let hint = Paragraph::new(Line::from(Span::styled(
            S::EMPTY_HINT,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(hint, chunks[0]);
    } else {
        let lines: Vec<Line> = editor
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let is_selected = editor.selected() == Some(index);
                let marker = if is_selected { "▸ " } else { "  " };
                let style = if is_selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(
                    format!("{marker}{}", S::columns(item).join("  ")),
                    style,
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[0]);
    }

    draw_input_row(frame, chunks[1], editor, active_input);
}

fn draw_input_row<S: ItemSchema>(
    frame: &mut Frame,
    area: Rect,
    editor: &ListEditor<S>,
    active_input: Option<usize>,
) {
    let count = editor.input_count() as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, input) in S::INPUTS.iter().enumerate() {
        let error = editor
            .error()
            .filter(|e| e.input == index)
            .map(|e| e.message.as_str());
        draw_input(
            frame,
            chunks[index],
            input.placeholder,
            editor.input_value(index),
            "",
            active_input == Some(index),
            error,
        );
    }
}
