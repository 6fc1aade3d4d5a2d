//! Submission channel module for sending the completed form

mod client;
mod traits;

pub use client::{HttpSubmissionChannel, SubmissionError, SubmitReceipt, DEFAULT_ENDPOINT};
pub use traits::SubmissionChannel;

#[cfg(test)]
pub use traits::MockSubmissionChannel;
