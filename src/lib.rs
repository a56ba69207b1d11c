//! feedback-flow library exports for testing

pub mod core;
pub mod flow;
pub mod host;
pub mod submission;

#[cfg(test)]
pub mod test_support;

pub use flow::{ExitSignal, FeedbackFlow};
