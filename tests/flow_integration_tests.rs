use async_trait::async_trait;
use feedback_flow::core::reason::SearchNotGoodEnoughSubReason;
use feedback_flow::core::{
    BuildMode, Direction, MainReason, Screen, StaticStoreDetector, SubReason,
};
use feedback_flow::submission::FeedbackSubmitter;
use feedback_flow::{ExitSignal, FeedbackFlow};
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

// ============================================================================
// Helper Functions
// ============================================================================

/// Keeps a human-readable log of every submitter call.
#[derive(Default)]
struct LogSubmitter {
    calls: Mutex<Vec<String>>,
}

impl LogSubmitter {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl FeedbackSubmitter for LogSubmitter {
    fn name(&self) -> &str {
        "log"
    }

    async fn send_negative_feedback(
        &self,
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
        text: String,
    ) {
        self.push(format!("negative {main_reason} {sub_reason:?} {text}"));
    }

    async fn send_broken_site_feedback(&self, text: String, url: Option<String>) {
        self.push(format!("broken {text} {url:?}"));
    }

    async fn send_positive_feedback(&self, text: Option<String>) {
        self.push(format!("positive {text:?}"));
    }

    async fn send_user_rated(&self) {
        self.push("rated".to_string());
    }
}

fn open_flow(
    store: StaticStoreDetector,
    build_mode: BuildMode,
) -> (FeedbackFlow, oneshot::Receiver<ExitSignal>, Arc<LogSubmitter>) {
    let submitter = Arc::new(LogSubmitter::default());
    let (flow, exit) = FeedbackFlow::new(
        Arc::new(store),
        submitter.clone(),
        build_mode,
        Handle::current(),
    );
    (flow, exit, submitter)
}

async fn finish(flow: &mut FeedbackFlow) {
    for handle in flow.take_pending() {
        handle.await.unwrap();
    }
}

// ============================================================================
// Walkthroughs
// ============================================================================

#[tokio::test]
async fn test_negative_walkthrough_with_detours() {
    let (mut flow, mut exit, submitter) = open_flow(StaticStoreDetector::default(), BuildMode::Release);
    let search = MainReason::SearchNotGoodEnough;
    let layout = SubReason::SearchNotGoodEnough(SearchNotGoodEnoughSubReason::LayoutMoreLikeGoogle);

    flow.select_negative();
    flow.select_main_reason(MainReason::Other);
    flow.on_back();
    assert_eq!(flow.current_view_state().screen(), Screen::NegativeMainReason);

    flow.select_main_reason(search);
    flow.select_sub_reason(search, layout);
    flow.on_back();

    let state = flow.current_view_state();
    assert_eq!(state.screen(), Screen::NegativeSubReason { main_reason: search });
    assert_eq!(state.current.direction, Direction::Backwards);
    assert_eq!(state.main_reason, Some(search));

    flow.select_sub_reason(search, layout);
    flow.submit_negative_open_ended(search, Some(layout), "results look cluttered".to_string());

    assert_eq!(exit.try_recv().unwrap(), ExitSignal { submitted: true });
    finish(&mut flow).await;
    assert_eq!(
        submitter.calls(),
        vec![format!("negative search_not_good {:?} results look cluttered", Some(layout))]
    );
}

#[tokio::test]
async fn test_broken_site_walkthrough() {
    let (mut flow, mut exit, submitter) = open_flow(StaticStoreDetector::default(), BuildMode::Release);

    flow.select_negative();
    flow.select_main_reason(MainReason::WebsitesNotLoading);
    assert!(matches!(
        flow.current_view_state().screen(),
        Screen::NegativeSitesBroken { .. }
    ));
    flow.submit_broken_site("checkout never loads".to_string(), Some("shop.example".to_string()));

    assert_eq!(exit.try_recv().unwrap(), ExitSignal { submitted: true });
    finish(&mut flow).await;
    assert_eq!(
        submitter.calls(),
        vec!["broken checkout never loads Some(\"shop.example\")".to_string()]
    );
}

#[tokio::test]
async fn test_positive_walkthrough_to_rating() {
    let store = StaticStoreDetector {
        installed: true,
        installed_from_store: true,
    };
    let (mut flow, mut exit, submitter) = open_flow(store, BuildMode::Release);

    flow.select_positive();
    assert_eq!(flow.current_view_state().screen(), Screen::PositiveFirstStep);
    flow.submit_rating_given();

    assert_eq!(exit.try_recv().unwrap(), ExitSignal { submitted: true });
    finish(&mut flow).await;
    assert_eq!(submitter.calls(), vec!["rated".to_string()]);
}

#[tokio::test]
async fn test_backing_out_of_everything() {
    let (mut flow, mut exit, submitter) = open_flow(StaticStoreDetector::default(), BuildMode::Debug);

    flow.select_positive();
    assert_eq!(flow.current_view_state().screen(), Screen::PositiveShare);
    flow.on_back();
    flow.on_back();

    assert_eq!(exit.try_recv().unwrap(), ExitSignal { submitted: false });
    assert!(flow.has_exited());
    assert!(flow.take_pending().is_empty());
    assert!(submitter.calls().is_empty());
}
