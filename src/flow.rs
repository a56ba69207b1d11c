//! # Feedback Flow Controller
//!
//! Owns the current `ViewState` and turns user events into transitions.
//! The navigation rules live in `core::update`; this type only carries out
//! the resulting effects:
//!
//! - publish the new snapshot to observers (`tokio::sync::watch`)
//! - fire the one-shot exit signal (`tokio::sync::oneshot`)
//! - dispatch submissions as detached tasks on the background runtime
//!
//! All event methods take `&mut self`, so there is exactly one writer and no
//! locking. Observers only ever see whole snapshots.

use log::{debug, info};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use crate::core::{
    Action, BuildMode, Effect, MainReason, RatingsGate, StoreDetector, SubReason, Submission,
    Transition, ViewState, update,
};
use crate::submission::FeedbackSubmitter;

/// Tells the host to close the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitSignal {
    pub submitted: bool,
}

pub struct FeedbackFlow {
    state: watch::Sender<ViewState>,
    gate: RatingsGate,
    submitter: Arc<dyn FeedbackSubmitter>,
    runtime: Handle,
    exit: Option<oneshot::Sender<ExitSignal>>,
    pending: Vec<JoinHandle<()>>,
}

impl FeedbackFlow {
    /// Creates a flow at the initial screen.
    ///
    /// Returns the controller and the receiving end of its exit signal.
    /// Submissions are spawned on `runtime`.
    pub fn new(
        detector: Arc<dyn StoreDetector>,
        submitter: Arc<dyn FeedbackSubmitter>,
        build_mode: BuildMode,
        runtime: Handle,
    ) -> (Self, oneshot::Receiver<ExitSignal>) {
        let (state, _) = watch::channel(ViewState::new());
        let (exit_tx, exit_rx) = oneshot::channel();
        info!(
            "Feedback flow opened (build mode {:?}, submitter {})",
            build_mode,
            submitter.name()
        );
        let flow = Self {
            state,
            gate: RatingsGate::new(detector, build_mode),
            submitter,
            runtime,
            exit: Some(exit_tx),
            pending: Vec::new(),
        };
        (flow, exit_rx)
    }

    pub fn current_view_state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Observe every snapshot as it is published.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn can_show_ratings_button(&self) -> bool {
        self.gate.can_show_ratings_button()
    }

    /// True once the exit signal has fired.
    pub fn has_exited(&self) -> bool {
        self.exit.is_none()
    }

    /// Hands over the handles of submissions dispatched so far.
    /// Dropping them leaves the tasks running.
    pub fn take_pending(&mut self) -> Vec<JoinHandle<()>> {
        std::mem::take(&mut self.pending)
    }

    // ------------------------------------------------------------------
    // Forward navigation
    // ------------------------------------------------------------------

    pub fn select_positive(&mut self) {
        self.dispatch(Action::SelectPositive);
    }

    pub fn select_negative(&mut self) {
        self.dispatch(Action::SelectNegative);
    }

    pub fn select_main_reason(&mut self, main_reason: MainReason) {
        self.dispatch(Action::SelectMainReason(main_reason));
    }

    pub fn select_sub_reason(&mut self, main_reason: MainReason, sub_reason: SubReason) {
        self.dispatch(Action::SelectSubReason(main_reason, sub_reason));
    }

    pub fn select_give_feedback(&mut self) {
        self.dispatch(Action::SelectGiveFeedback);
    }

    // ------------------------------------------------------------------
    // Backward navigation and exits
    // ------------------------------------------------------------------

    pub fn on_back(&mut self) {
        self.dispatch(Action::Back);
    }

    pub fn user_cancel(&mut self) {
        info!("User is cancelling");
        self.dispatch(Action::Cancel);
    }

    // ------------------------------------------------------------------
    // Terminal submissions
    // ------------------------------------------------------------------

    pub fn submit_negative_open_ended(
        &mut self,
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
        text: String,
    ) {
        self.dispatch(Action::SubmitNegativeOpenEnded {
            main_reason,
            sub_reason,
            text,
        });
    }

    pub fn submit_broken_site(&mut self, text: String, url: Option<String>) {
        self.dispatch(Action::SubmitBrokenSite { text, url });
    }

    pub fn submit_positive_no_details(&mut self) {
        self.dispatch(Action::SubmitPositiveNoDetails);
    }

    pub fn submit_positive_open_ended(&mut self, text: String) {
        self.dispatch(Action::SubmitPositiveOpenEnded(text));
    }

    /// The host has already sent the user to the store's rating page.
    pub fn submit_rating_given(&mut self) {
        self.dispatch(Action::SubmitRatingGiven);
    }

    fn dispatch(&mut self, action: Action) {
        if self.has_exited() {
            debug!("Flow already exited, ignoring {:?}", action);
            return;
        }

        let current = self.current_view_state();
        let Transition { state, effect } = update(&current, action, &self.gate);
        if state != current {
            self.state.send_replace(state);
        }

        match effect {
            Effect::None => {}
            Effect::Exit { submitted } => self.fire_exit(submitted),
            Effect::Submit(submission) => {
                self.spawn_submission(submission);
                self.fire_exit(true);
            }
        }
    }

    fn fire_exit(&mut self, submitted: bool) {
        if let Some(tx) = self.exit.take() {
            info!("Feedback flow exiting (submitted: {})", submitted);
            if tx.send(ExitSignal { submitted }).is_err() {
                debug!("Exit signal receiver already dropped");
            }
        }
    }

    fn spawn_submission(&mut self, submission: Submission) {
        let submitter = Arc::clone(&self.submitter);
        debug!("Dispatching {:?} to {}", submission, submitter.name());

        let handle = self.runtime.spawn(async move {
            match submission {
                Submission::Negative {
                    main_reason,
                    sub_reason,
                    text,
                } => {
                    submitter
                        .send_negative_feedback(main_reason, sub_reason, text)
                        .await
                }
                Submission::BrokenSite { text, url } => {
                    submitter.send_broken_site_feedback(text, url).await
                }
                Submission::Positive(text) => submitter.send_positive_feedback(text).await,
                Submission::Rated => submitter.send_user_rated().await,
            }
        });
        self.pending.push(handle);
    }
}
