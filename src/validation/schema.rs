//! Declarative per-field rule table

use super::email::is_valid_email;
use crate::state::{FieldName, FieldValue, FormState};

/// A single constraint on a field value, with the message reported when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-empty
    Required { message: &'static str },
    /// Non-empty text must be an e-mail address. Empty text passes.
    Email { message: &'static str },
    /// Text must have at least `min` characters
    MinLength { min: usize, message: &'static str },
    /// Value must equal `expected`
    Equals {
        expected: FieldValue,
        message: &'static str,
    },
}

impl Rule {
    fn check(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Rule::Required { .. }, FieldValue::Text(s)) => !s.is_empty(),
            (Rule::Required { .. }, FieldValue::Flag(_)) => true,
            (Rule::Email { .. }, FieldValue::Text(s)) => s.is_empty() || is_valid_email(s),
            (Rule::MinLength { min, .. }, FieldValue::Text(s)) => s.chars().count() >= *min,
            (Rule::Equals { expected, .. }, v) => v == expected,
            (Rule::Email { .. } | Rule::MinLength { .. }, FieldValue::Flag(_)) => false,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required { message }
            | Rule::Email { message }
            | Rule::MinLength { message, .. }
            | Rule::Equals { message, .. } => message,
        }
    }
}

/// Failure of a single field against its rules
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

/// Immutable set of rules for every form field.
///
/// Rules are evaluated in declaration order and only the first failure
/// is reported.
#[derive(Debug, Clone)]
pub struct ValidationSchema {
    fields: Vec<(FieldName, Vec<Rule>)>,
}

impl ValidationSchema {
    /// Build a schema from `(field, rules)` pairs
    pub fn new(fields: Vec<(FieldName, Vec<Rule>)>) -> Self {
        Self { fields }
    }

    /// Rules of the onboarding form
    pub fn onboarding() -> Self {
        Self::new(vec![
            (
                FieldName::Name,
                vec![Rule::Required {
                    message: "Must include your name.",
                }],
            ),
            (
                FieldName::Email,
                vec![
                    Rule::Email {
                        message: "Must be a valid email address",
                    },
                    Rule::Required {
                        message: "Must include your email address",
                    },
                ],
            ),
            (
                FieldName::Password,
                vec![
                    Rule::MinLength {
                        min: 6,
                        message: "Password must be at least 6 characters long",
                    },
                    Rule::Required {
                        message: "Password is required",
                    },
                ],
            ),
            (
                FieldName::Terms,
                vec![Rule::Equals {
                    expected: FieldValue::Flag(true),
                    message: "You must accept Terms and Conditions",
                }],
            ),
        ])
    }

    /// Rules declared for `field`; empty when the field has none
    pub fn rules(&self, field: FieldName) -> &[Rule] {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Check one value against the rules of `field`
    pub fn validate_field(
        &self,
        field: FieldName,
        value: &FieldValue,
    ) -> Result<(), FieldValidationError> {
        match self.rules(field).iter().find(|rule| !rule.check(value)) {
            Some(rule) => Err(FieldValidationError {
                field,
                message: rule.message().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// First failure of every invalid field, in declaration order
    pub fn validate(&self, form: &FormState) -> Vec<FieldValidationError> {
        self.fields
            .iter()
            .filter_map(|(field, _)| self.validate_field(*field, &form.value(*field)).err())
            .collect()
    }

    /// Whether the whole form satisfies every rule
    pub fn is_valid(&self, form: &FormState) -> bool {
        self.validate(form).is_empty()
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::onboarding()
    }
}
