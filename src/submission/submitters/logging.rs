//! Dry-run submitter: builds the payload and logs it instead of sending it.

use async_trait::async_trait;
use log::info;

use crate::core::reason::{MainReason, SubReason};
use crate::submission::{AppInfo, FeedbackPayload, FeedbackSubmitter};

pub struct LoggingSubmitter {
    app: AppInfo,
}

impl LoggingSubmitter {
    pub fn new(app: AppInfo) -> Self {
        Self { app }
    }

    fn log(&self, payload: FeedbackPayload) {
        match serde_json::to_string(&payload) {
            Ok(json) => info!("[dry run] feedback payload: {}", json),
            Err(e) => info!("[dry run] feedback payload {:?} ({})", payload, e),
        }
    }
}

#[async_trait]
impl FeedbackSubmitter for LoggingSubmitter {
    fn name(&self) -> &str {
        "dry-run"
    }

    async fn send_negative_feedback(
        &self,
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
        text: String,
    ) {
        self.log(FeedbackPayload::negative(&self.app, main_reason, sub_reason, text));
    }

    async fn send_broken_site_feedback(&self, text: String, url: Option<String>) {
        self.log(FeedbackPayload::broken_site(&self.app, text, url));
    }

    async fn send_positive_feedback(&self, text: Option<String>) {
        self.log(FeedbackPayload::positive(&self.app, text));
    }

    async fn send_user_rated(&self) {
        self.log(FeedbackPayload::rated(&self.app));
    }
}
