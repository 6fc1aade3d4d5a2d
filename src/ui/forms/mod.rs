//! Form rendering module
//!
//! - `field_renderer`: text field, checkbox and error line primitives
//! - `onboarding_form`: the onboarding form view

mod field_renderer;
mod onboarding_form;

pub use onboarding_form::draw_onboarding_form;
