//! Trait abstraction for the webhook client to enable mocking in tests

use async_trait::async_trait;

use super::client::{SubmissionRequest, SubmitError};
use crate::document::DocumentType;

/// Outcome of an acquirer lookup. Transport errors, bad statuses and
/// malformed bodies all collapse into `NotFound`; the workflow never sees a
/// distinct transport-error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultOutcome {
    Found { legal_name: String, email: String },
    NotFound,
}

/// Webhook operations used by the intake workflow
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookApi: Send + Sync {
    /// Look up the acquirer registered for a document with the tax authority
    async fn consult(&self, document_type: DocumentType, document_number: &str) -> ConsultOutcome;

    /// Post a completed intake request to the back office
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmitError>;
}
