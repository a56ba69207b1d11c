pub mod submitter;
pub mod submitters;
pub mod types;

pub use submitter::{FeedbackSubmitter, SubmitError};
pub use submitters::{ApiSubmitter, LoggingSubmitter};
pub use types::{AppInfo, FeedbackKind, FeedbackPayload};
