//! Form controller
//!
//! Owns the onboarding form's values, per-field error messages and the
//! submit-enabled flag. The rendering host reads these and drives the
//! controller through two hooks: [`FormController::on_field_change`] and
//! [`FormController::on_submit`].

use crate::state::{ErrorState, FieldChange, FieldName, FormState};
use crate::submit::{SubmissionChannel, SubmissionError, SubmitReceipt};
use crate::validation::ValidationSchema;
use std::sync::Arc;

/// Minimum stored message length before the password error is displayed
const PASSWORD_ERROR_DISPLAY_MIN: usize = 6;

pub struct FormController<C> {
    schema: Arc<ValidationSchema>,
    channel: C,
    form: FormState,
    errors: ErrorState,
    submit_enabled: bool,
}

impl<C: SubmissionChannel> FormController<C> {
    pub fn new(schema: Arc<ValidationSchema>, channel: C) -> Self {
        let mut controller = Self {
            schema,
            channel,
            form: FormState::new(),
            errors: ErrorState::new(),
            submit_enabled: false,
        };
        controller.recheck_validity();
        controller
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// Whether the last whole-form check passed
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Merge one input event into the form, validate the changed field and
    /// recheck whole-form validity. Failures are recorded, never returned.
    pub fn on_field_change(&mut self, change: FieldChange) {
        let field = change.field;
        if !change.value.fits(field) {
            tracing::debug!("Coercing {:?} for field {field}", change.value);
        }

        self.form = self.form.apply(change);
        self.validate_field(field);
        self.recheck_validity();
    }

    /// Validate `field` against the current form and store the outcome in the error state
    fn validate_field(&mut self, field: FieldName) {
        match self.schema.validate_field(field, &self.form.value(field)) {
            Ok(()) => self.errors.clear(field),
            Err(err) => {
                tracing::debug!("Field {field} invalid: {err}");
                self.errors.set(field, err.message);
            }
        }
    }

    /// Re-evaluate the schema over the whole form. Only drives `submit_enabled`.
    pub fn recheck_validity(&mut self) -> bool {
        self.submit_enabled = self.schema.is_valid(&self.form);
        self.submit_enabled
    }

    /// Send the current form without re-validating.
    ///
    /// On success the form resets to empty and the error state is left as
    /// is. On failure nothing changes and the error is logged.
    pub async fn on_submit(&mut self) -> Result<SubmitReceipt, SubmissionError> {
        match self.channel.submit(&self.form).await {
            Ok(receipt) => {
                tracing::info!("Form submitted ({}): {}", receipt.status, receipt.body);
                self.form = FormState::new();
                self.recheck_validity();
                if !self.errors.is_empty() {
                    tracing::debug!("Form reset; field errors kept: {:?}", self.errors);
                }
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!("Form submission failed: {err}");
                Err(err)
            }
        }
    }

    /// Error message the host should render for `field`, if any.
    ///
    /// Name and e-mail show whenever set. The password message shows only
    /// when longer than six characters. The terms message is never shown.
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        let message = self.errors().get(field);
        let shown = match field {
            FieldName::Name | FieldName::Email => !message.is_empty(),
            FieldName::Password => message.chars().count() > PASSWORD_ERROR_DISPLAY_MIN,
            FieldName::Terms => false,
        };
        shown.then_some(message)
    }
}
