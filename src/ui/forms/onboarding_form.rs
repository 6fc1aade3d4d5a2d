//! Onboarding form rendering

use super::field_renderer::{
    draw_checkbox, draw_error_line, draw_text_field, mask, FIELD_HEIGHT,
};
use crate::app::App;
use crate::state::{FieldName, Focus};
use crate::submit::SubmissionChannel;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the four fields, their error lines and the submit button
pub fn draw_onboarding_form<C: SubmissionChannel>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let block = Block::default()
        .title(" Advanced Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(1),            // Name error
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(1),            // Email error
            Constraint::Length(FIELD_HEIGHT), // Password
            Constraint::Length(1),            // Password error
            Constraint::Length(FIELD_HEIGHT), // Terms
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let form = app.controller.form();
    let focus = app.state.focus;

    for (i, field) in [FieldName::Name, FieldName::Email, FieldName::Password]
        .into_iter()
        .enumerate()
    {
        let raw = form.text(field);
        let shown = if field == FieldName::Password && app.state.mask_password {
            mask(raw)
        } else {
            raw.to_string()
        };
        draw_text_field(
            frame,
            chunks[i * 2],
            field.label(),
            &shown,
            focus == Focus::from(field),
        );
        draw_error_line(frame, chunks[i * 2 + 1], app.controller.visible_error(field));
    }

    draw_checkbox(
        frame,
        chunks[6],
        FieldName::Terms.label(),
        form.terms,
        focus == Focus::Terms,
    );

    let button_area = Rect {
        width: chunks[7].width.min(14),
        ..chunks[7]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        focus == Focus::Submit,
        app.controller.submit_enabled(),
    );
}
