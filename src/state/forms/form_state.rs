//! Form state management: field values and per-field error messages

use super::field::{FieldChange, FieldName, FieldValue};
use serde::{Deserialize, Serialize};

/// Current values of all onboarding fields.
///
/// Serializes to the submission body `{name, email, password, terms}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub terms: bool,
}

impl FormState {
    /// Empty form: all text blank, terms unchecked
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new state with `change` merged in; every other field is carried over.
    ///
    /// Values of the wrong kind are coerced (see [`FieldValue::into_text`] and
    /// [`FieldValue::as_flag`]).
    pub fn apply(&self, change: FieldChange) -> Self {
        let mut next = self.clone();
        match change.field {
            FieldName::Name => next.name = change.value.into_text(),
            FieldName::Email => next.email = change.value.into_text(),
            FieldName::Password => next.password = change.value.into_text(),
            FieldName::Terms => next.terms = change.value.as_flag(),
        }
        next
    }

    /// Current value of a single field
    pub fn value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Name => FieldValue::Text(self.name.clone()),
            FieldName::Email => FieldValue::Text(self.email.clone()),
            FieldName::Password => FieldValue::Text(self.password.clone()),
            FieldName::Terms => FieldValue::Flag(self.terms),
        }
    }

    /// Text value of a text field; empty for the checkbox
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::Terms => "",
        }
    }
}

/// Per-field validation messages. An empty string means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub terms: String,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::Terms => &self.terms,
        }
    }

    /// Replace the message of one field, leaving the others as they are
    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::Terms => &mut self.terms,
        };
        *slot = message.into();
    }

    pub fn clear(&mut self, field: FieldName) {
        self.set(field, String::new());
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
