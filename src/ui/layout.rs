//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::submit::SubmissionChannel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar<C: SubmissionChannel>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let mut spans = vec![Span::styled(
        format!(" Tab:next  Space:toggle  Enter/{SUBMIT_SHORTCUT}:submit "),
        Style::default().fg(Color::White),
    )];

    if !app.controller.submit_enabled() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "complete the form to submit",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(notice) = &app.state.notice {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(&notice.text, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
