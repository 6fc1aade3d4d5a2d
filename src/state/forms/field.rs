//! Form field value objects

use std::fmt;
use std::str::FromStr;

/// The four fields of the onboarding form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Password,
    Terms,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Password,
        FieldName::Terms,
    ];

    /// Wire/JSON key of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Terms => "terms",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "E-mail",
            Self::Password => "Password",
            Self::Terms => "Do you accept the Terms and Conditions?",
        }
    }

    /// Whether the field is a checkbox rather than a text input
    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::Terms)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown field name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "terms" => Ok(Self::Terms),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Raw value delivered by an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Text form of the value. Flags render as `"true"`/`"false"`.
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(b) => b.to_string(),
        }
    }

    /// Checkbox form of the value. Text counts as checked only for `"true"` or `"on"`.
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(s) => matches!(s.as_str(), "true" | "on"),
        }
    }

    /// Whether the value kind matches what the field expects
    pub fn fits(&self, field: FieldName) -> bool {
        matches!(self, FieldValue::Flag(_)) == field.is_checkbox()
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// A single user input event: the field that changed and its new raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: FieldName,
    pub value: FieldValue,
}

impl FieldChange {
    pub fn new(field: FieldName, value: impl Into<FieldValue>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
