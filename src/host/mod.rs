//! # Command Host
//!
//! A line-driven adapter standing in for a real UI. It reads commands,
//! translates them into `FeedbackFlow` events and prints the screen after
//! each one.
//!
//! This is the only module that knows about text input and output.
//! Once the exit signal fires the host stops reading and never looks at
//! flow state again.

pub mod command;

use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot::error::TryRecvError;

use crate::core::config::ResolvedConfig;
use crate::core::{MainReason, Screen, SubReason, ViewState};
use crate::flow::{ExitSignal, FeedbackFlow};
use crate::submission::{ApiSubmitter, AppInfo, FeedbackSubmitter, LoggingSubmitter};

pub use command::{HostCommand, HostError};

/// Build a submitter from the resolved config.
pub fn build_submitter(config: &ResolvedConfig) -> Arc<dyn FeedbackSubmitter> {
    let app = AppInfo {
        platform: config.platform.clone(),
        version: config.app_version.clone(),
    };
    if config.dry_run {
        Arc::new(LoggingSubmitter::new(app))
    } else {
        Arc::new(ApiSubmitter::new(config.endpoint.clone(), app))
    }
}

/// Drives one flow from `input` until it exits or input runs out.
///
/// Returns the exit signal, or `None` when input ended first.
pub async fn run<R: BufRead, W: Write>(
    config: &ResolvedConfig,
    input: R,
    out: &mut W,
) -> Result<Option<ExitSignal>, HostError> {
    let (mut flow, mut exit) = FeedbackFlow::new(
        Arc::new(config.store),
        build_submitter(config),
        config.build_mode,
        Handle::current(),
    );

    writeln!(out, "{}", render(&flow.current_view_state()))?;

    for line in input.lines() {
        let line = line?;
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("Rejected input {:?}: {}", line, e);
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        debug!("Host command: {:?}", command);

        if let Err(e) = apply(&mut flow, command, out) {
            warn!("Command failed: {}", e);
            writeln!(out, "error: {e}")?;
            continue;
        }

        match exit.try_recv() {
            Ok(signal) => {
                for handle in flow.take_pending() {
                    if let Err(e) = handle.await {
                        warn!("Submission task failed: {}", e);
                    }
                }
                let outcome = if signal.submitted {
                    "Thanks for your feedback!"
                } else {
                    "Feedback closed without submitting."
                };
                writeln!(out, "{outcome}")?;
                return Ok(Some(signal));
            }
            Err(TryRecvError::Empty) => writeln!(out, "{}", render(&flow.current_view_state()))?,
            Err(TryRecvError::Closed) => return Ok(None),
        }
    }

    info!("Input ended before the feedback flow exited");
    Ok(None)
}

/// Translates one command into flow events.
pub fn apply<W: Write>(
    flow: &mut FeedbackFlow,
    command: HostCommand,
    out: &mut W,
) -> Result<(), HostError> {
    match command {
        HostCommand::Positive => flow.select_positive(),
        HostCommand::Negative => flow.select_negative(),
        HostCommand::Reason(main_reason) => flow.select_main_reason(main_reason),
        HostCommand::Sub(name) => {
            let main_reason = selected_main_reason(flow)?;
            let sub_reason = SubReason::parse(main_reason, &name)?;
            flow.select_sub_reason(main_reason, sub_reason);
        }
        HostCommand::GiveFeedback => flow.select_give_feedback(),
        HostCommand::Back => flow.on_back(),
        HostCommand::Cancel => flow.user_cancel(),
        HostCommand::SubmitNegative(text) => {
            let main_reason = selected_main_reason(flow)?;
            let sub_reason = flow.current_view_state().sub_reason;
            flow.submit_negative_open_ended(main_reason, sub_reason, text);
        }
        HostCommand::Broken { text, url } => flow.submit_broken_site(text, url),
        HostCommand::SubmitPositive(Some(text)) => flow.submit_positive_open_ended(text),
        HostCommand::SubmitPositive(None) => flow.submit_positive_no_details(),
        HostCommand::Rate => flow.submit_rating_given(),
        HostCommand::State => writeln!(out, "{:#?}", flow.current_view_state())?,
    }
    Ok(())
}

fn selected_main_reason(flow: &FeedbackFlow) -> Result<MainReason, HostError> {
    flow.current_view_state()
        .main_reason
        .ok_or(HostError::NoMainReason)
}

/// Screen title plus the commands that make sense on it.
pub fn render(state: &ViewState) -> String {
    let mut lines = Vec::new();
    match state.screen() {
        Screen::InitialClarifier => {
            lines.push("Are you enjoying the app?".to_string());
            lines.push("  positive | negative | cancel".to_string());
        }
        Screen::PositiveFirstStep => {
            lines.push("Awesome! Would you rate us in the store?".to_string());
            lines.push("  rate | give-feedback | submit-positive | back".to_string());
        }
        Screen::PositiveShare => {
            lines.push("What do you like most?".to_string());
            lines.push("  submit-positive [text] | back".to_string());
        }
        Screen::NegativeMainReason => {
            lines.push("We're sorry to hear that. What's the main problem?".to_string());
            for reason in MainReason::ALL {
                lines.push(format!("  reason {:<18} {}", reason.as_str(), reason.label()));
            }
            lines.push("  back | cancel".to_string());
        }
        Screen::NegativeSubReason { main_reason } => {
            lines.push(format!("{}: what in particular?", main_reason.label()));
            for sub in main_reason.sub_reasons() {
                lines.push(format!("  sub {}", sub.as_str()));
            }
            lines.push("  back | cancel".to_string());
        }
        Screen::NegativeSitesBroken { .. } => {
            lines.push("Which website is broken, and what went wrong?".to_string());
            lines.push("  broken [--url <url>] <text> | back".to_string());
        }
        Screen::NegativeOpenEnded {
            main_reason,
            sub_reason,
        } => {
            match sub_reason {
                Some(sub) => lines.push(format!("Tell us more ({main_reason} / {sub}):")),
                None => lines.push(format!("Tell us more ({main_reason}):")),
            }
            lines.push("  submit-negative <text> | back".to_string());
        }
    }
    lines.join("\n")
}
