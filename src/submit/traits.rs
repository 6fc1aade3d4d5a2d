//! Trait abstraction for the submission channel to enable mocking in tests

use super::client::{SubmissionError, SubmitReceipt};
use crate::state::FormState;
use async_trait::async_trait;

/// Sends a completed form to the remote endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionChannel: Send + Sync {
    /// Perform one request/response exchange carrying `form`
    async fn submit(&self, form: &FormState) -> Result<SubmitReceipt, SubmissionError>;
}
