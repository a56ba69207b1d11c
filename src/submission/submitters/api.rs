//! HTTP submitter for the feedback service.
//!
//! Each call posts one JSON `FeedbackPayload` to the configured endpoint.
//! There is no retry and no queue: a failed post is logged and dropped.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::reason::{MainReason, SubReason};
use crate::submission::{AppInfo, FeedbackPayload, FeedbackSubmitter, SubmitError};

pub struct ApiSubmitter {
    endpoint: String,
    app: AppInfo,
    client: reqwest::Client,
}

impl ApiSubmitter {
    /// Creates a new submitter.
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the feedback endpoint
    /// * `app` - Platform and version stamped on every payload
    pub fn new(endpoint: String, app: AppInfo) -> Self {
        Self {
            endpoint,
            app,
            client: reqwest::Client::new(),
        }
    }

    /// Posts a payload and reports whether the service accepted it.
    pub async fn post(&self, payload: &FeedbackPayload) -> Result<(), SubmitError> {
        debug!("Posting feedback payload: {:?}", payload);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        debug!("Feedback service response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SubmitError::Api { status, message });
        }

        Ok(())
    }

    async fn deliver(&self, payload: FeedbackPayload) {
        let kind = payload.kind;
        match self.post(&payload).await {
            Ok(()) => info!("Feedback submitted: {:?}", kind),
            Err(e) => warn!("Failed to submit {:?} feedback: {}", kind, e),
        }
    }
}

#[async_trait]
impl FeedbackSubmitter for ApiSubmitter {
    fn name(&self) -> &str {
        "api"
    }

    async fn send_negative_feedback(
        &self,
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
        text: String,
    ) {
        self.deliver(FeedbackPayload::negative(&self.app, main_reason, sub_reason, text))
            .await;
    }

    async fn send_broken_site_feedback(&self, text: String, url: Option<String>) {
        self.deliver(FeedbackPayload::broken_site(&self.app, text, url))
            .await;
    }

    async fn send_positive_feedback(&self, text: Option<String>) {
        self.deliver(FeedbackPayload::positive(&self.app, text)).await;
    }

    async fn send_user_rated(&self) {
        self.deliver(FeedbackPayload::rated(&self.app)).await;
    }
}
