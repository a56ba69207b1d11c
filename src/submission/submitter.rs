use std::fmt;

use async_trait::async_trait;

use crate::core::reason::{MainReason, SubReason};

/// Errors that can occur while delivering feedback.
/// Submitters log these; the flow never sees them.
#[derive(Debug)]
pub enum SubmitError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The feedback service answered with a non-success status.
    Api { status: u16, message: String },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(msg) => write!(f, "network error: {msg}"),
            SubmitError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// Delivers collected feedback.
///
/// Calls are fire-and-forget from the flow's point of view: nothing is
/// returned, and implementations deal with their own failures.
#[async_trait]
pub trait FeedbackSubmitter: Send + Sync {
    /// Returns the name of the submitter.
    fn name(&self) -> &str;

    async fn send_negative_feedback(
        &self,
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
        text: String,
    );

    async fn send_broken_site_feedback(&self, text: String, url: Option<String>);

    /// `None` means the user chose not to add details.
    async fn send_positive_feedback(&self, text: Option<String>);

    async fn send_user_rated(&self);
}
