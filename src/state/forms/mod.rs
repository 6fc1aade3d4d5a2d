//! Form domain layer
//!
//! Type-safe field names, raw input values and the two records the form
//! controller owns: current values and per-field error messages.

mod field;
mod form_state;

pub use field::{FieldChange, FieldName, FieldValue};
pub use form_state::{ErrorState, FormState};
