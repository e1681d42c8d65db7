//! Webhook clients for the consult and submission endpoints

pub mod client;
pub mod traits;

pub use client::{HttpWebhookClient, SubmissionRequest, SubmitError};
pub use traits::{ConsultOutcome, WebhookApi};

#[cfg(test)]
pub use traits::MockWebhookApi;
