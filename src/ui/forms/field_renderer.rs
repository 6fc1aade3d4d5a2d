//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered single-line field
pub const FIELD_HEIGHT: u16 = 3;

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a single-line text field with its label as the border title
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
) {
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, focus_style(is_active)),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(content.block(block), area);
}

/// Draw a checkbox line: `[x] label`
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(mark, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::raw(label),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(content.block(block), area);
}

/// Draw a validation message under a field, or nothing
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, area);
    }
}

/// Replace every character with `*`
pub fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}
