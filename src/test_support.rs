//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};

use crate::core::{BuildMode, MainReason, RatingsGate, StaticStoreDetector, SubReason};
use crate::flow::{ExitSignal, FeedbackFlow};
use crate::submission::FeedbackSubmitter;

/// One call received by a `RecordingSubmitter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitterCall {
    Negative(MainReason, Option<SubReason>, String),
    BrokenSite(String, Option<String>),
    Positive(Option<String>),
    Rated,
}

/// A submitter that forwards every call to a channel instead of the network.
pub struct RecordingSubmitter {
    calls: mpsc::UnboundedSender<SubmitterCall>,
}

impl RecordingSubmitter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SubmitterCall>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { calls: tx }, rx)
    }

    fn record(&self, call: SubmitterCall) {
        let _ = self.calls.send(call);
    }
}

#[async_trait]
impl FeedbackSubmitter for RecordingSubmitter {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send_negative_feedback(
        &self,
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
        text: String,
    ) {
        self.record(SubmitterCall::Negative(main_reason, sub_reason, text));
    }

    async fn send_broken_site_feedback(&self, text: String, url: Option<String>) {
        self.record(SubmitterCall::BrokenSite(text, url));
    }

    async fn send_positive_feedback(&self, text: Option<String>) {
        self.record(SubmitterCall::Positive(text));
    }

    async fn send_user_rated(&self) {
        self.record(SubmitterCall::Rated);
    }
}

/// A ratings gate with fixed store answers.
pub fn fixed_gate(installed: bool, installed_from_store: bool, build_mode: BuildMode) -> RatingsGate {
    RatingsGate::new(
        Arc::new(StaticStoreDetector {
            installed,
            installed_from_store,
        }),
        build_mode,
    )
}

pub struct TestFlow {
    pub flow: FeedbackFlow,
    pub exit: oneshot::Receiver<ExitSignal>,
    pub calls: mpsc::UnboundedReceiver<SubmitterCall>,
}

/// Creates a flow wired to a `RecordingSubmitter` on the current runtime.
pub fn test_flow(installed: bool, installed_from_store: bool, build_mode: BuildMode) -> TestFlow {
    let (submitter, calls) = RecordingSubmitter::new();
    let (flow, exit) = FeedbackFlow::new(
        Arc::new(StaticStoreDetector {
            installed,
            installed_from_store,
        }),
        Arc::new(submitter),
        build_mode,
        Handle::current(),
    );
    TestFlow { flow, exit, calls }
}
