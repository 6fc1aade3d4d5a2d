//! Client-side validation of the onboarding form

mod email;
mod schema;

pub use schema::ValidationSchema;
