//! Application state and core logic

use crate::config::OnboardConfig;
use crate::controller::FormController;
use crate::platform::{is_text_input, SUBMIT_MODIFIERS};
use crate::state::{AppState, FieldChange, FieldName, Focus, Notice};
use crate::submit::{HttpSubmissionChannel, SubmissionChannel};
use crate::validation::ValidationSchema;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window in which a second Ctrl+C quits
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

/// Main application struct
pub struct App<C = HttpSubmissionChannel> {
    /// UI state outside the form
    pub state: AppState,
    /// Form values, errors and submission
    pub controller: FormController<C>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    last_ctrl_c: Option<Instant>,
}

impl App<HttpSubmissionChannel> {
    /// Create the app from user configuration
    pub fn from_config(config: &OnboardConfig) -> Self {
        let channel = HttpSubmissionChannel::new(config.resolve_endpoint());
        tracing::info!("Submitting onboarding form to {}", channel.endpoint());
        Self::new(channel, AppState::new(config.mask_password()))
    }
}

impl<C: SubmissionChannel> App<C> {
    pub fn new(channel: C, state: AppState) -> Self {
        let schema = Arc::new(ValidationSchema::onboarding());
        Self {
            state,
            controller: FormController::new(schema, channel),
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.expire_notice();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        let focus = self.state.focus;
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Char('s')
                if key.modifiers.intersects(SUBMIT_MODIFIERS) && !is_text_input(key.modifiers) =>
            {
                self.submit().await;
            }
            KeyCode::Enter if focus == Focus::Submit => self.submit().await,
            KeyCode::Enter | KeyCode::Char(' ') if focus == Focus::Terms => {
                let checked = !self.controller.form().terms;
                self.controller
                    .on_field_change(FieldChange::new(FieldName::Terms, checked));
            }
            KeyCode::Enter => self.state.next_focus(),
            KeyCode::Char(c) if is_text_input(key.modifiers) => {
                if let Some(field) = focus.field().filter(|f| !f.is_checkbox()) {
                    let mut value = self.controller.form().text(field).to_string();
                    value.push(c);
                    self.controller.on_field_change(FieldChange::new(field, value));
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = focus.field().filter(|f| !f.is_checkbox()) {
                    let mut value = self.controller.form().text(field).to_string();
                    value.pop();
                    self.controller.on_field_change(FieldChange::new(field, value));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// First Ctrl+C arms, a second one within the window quits
    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= DOUBLE_CTRL_C_WINDOW => self.quit = true,
            _ => self.last_ctrl_c = Some(now),
        }
    }

    /// Submit if the last validity check passed. Failures are only logged.
    async fn submit(&mut self) {
        if !self.controller.submit_enabled() {
            tracing::debug!("Submit ignored: form is not valid");
            return;
        }
        if self.controller.on_submit().await.is_ok() {
            self.state.focus = Focus::Name;
            self.state.notice = Some(Notice::new("Submitted!"));
        }
    }
}
