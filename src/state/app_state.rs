//! Application state definitions

use super::forms::FieldName;
use std::time::{Duration, Instant};

/// How long the "Submitted!" note stays in the status bar
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Password,
    Terms,
    Submit,
}

impl Focus {
    const RING: [Focus; 5] = [
        Focus::Name,
        Focus::Email,
        Focus::Password,
        Focus::Terms,
        Focus::Submit,
    ];

    fn index(&self) -> usize {
        Self::RING.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::RING[Self::RING.len() - 1]
        } else {
            Self::RING[idx - 1]
        }
    }

    /// Form field under focus, `None` on the submit button
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Focus::Name => Some(FieldName::Name),
            Focus::Email => Some(FieldName::Email),
            Focus::Password => Some(FieldName::Password),
            Focus::Terms => Some(FieldName::Terms),
            Focus::Submit => None,
        }
    }
}

impl From<FieldName> for Focus {
    fn from(field: FieldName) -> Self {
        match field {
            FieldName::Name => Focus::Name,
            FieldName::Email => Focus::Email,
            FieldName::Password => Focus::Password,
            FieldName::Terms => Focus::Terms,
        }
    }
}

/// Short-lived status bar message
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    created: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= NOTICE_TTL
    }
}

/// UI state that lives outside the form controller
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    pub notice: Option<Notice>,
    /// Render the password as `*`
    pub mask_password: bool,
}

impl AppState {
    pub fn new(mask_password: bool) -> Self {
        Self {
            mask_password,
            ..Default::default()
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Drop the status notice once it has expired
    pub fn expire_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_name() {
        assert_eq!(AppState::default().focus, Focus::Name);
    }

    #[test]
    fn test_next_focus_cycles() {
        let mut state = AppState::default();
        for _ in 0..5 {
            state.next_focus();
        }
        assert_eq!(state.focus, Focus::Name);
    }

    #[test]
    fn test_prev_focus_wraps_to_submit() {
        let mut state = AppState::default();
        state.prev_focus();
        assert_eq!(state.focus, Focus::Submit);
        state.prev_focus();
        assert_eq!(state.focus, Focus::Terms);
    }

    #[test]
    fn test_focus_field_mapping() {
        for field in FieldName::ALL {
            assert_eq!(Focus::from(field).field(), Some(field));
        }
        assert_eq!(Focus::Submit.field(), None);
    }

    #[test]
    fn test_fresh_notice_is_kept() {
        let mut state = AppState::new(true);
        state.notice = Some(Notice::new("Submitted!"));
        state.expire_notice();
        assert!(state.notice.is_some());
        assert!(state.mask_password);
    }
}
