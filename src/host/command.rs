//! Line-oriented host commands.
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! positive | negative | give-feedback | back | cancel | rate | state
//! reason <main_reason>            e.g. reason search_not_good
//! sub <sub_reason>                e.g. sub autocomplete
//! submit-negative <text...>
//! broken [--url <url>] <text...>
//! submit-positive [text...]       no text = no details
//! ```

use std::fmt;

use crate::core::reason::{MainReason, UnknownReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Positive,
    Negative,
    Reason(MainReason),
    /// Sub-reason wire name, resolved against the selected main reason.
    Sub(String),
    GiveFeedback,
    Back,
    Cancel,
    SubmitNegative(String),
    Broken { text: String, url: Option<String> },
    SubmitPositive(Option<String>),
    Rate,
    State,
}

#[derive(Debug)]
pub enum HostError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    UnknownReason(UnknownReason),
    /// A sub-reason or negative submission was given before any main reason.
    NoMainReason,
    Io(std::io::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            HostError::MissingArgument(what) => write!(f, "missing argument: {what}"),
            HostError::UnknownReason(e) => write!(f, "{e}"),
            HostError::NoMainReason => write!(f, "no main reason selected yet"),
            HostError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for HostError {}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        HostError::Io(e)
    }
}

impl From<UnknownReason> for HostError {
    fn from(e: UnknownReason) -> Self {
        HostError::UnknownReason(e)
    }
}

/// Parses one input line. `Ok(None)` for blank lines and comments.
pub fn parse(line: &str) -> Result<Option<HostCommand>, HostError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "positive" => HostCommand::Positive,
        "negative" => HostCommand::Negative,
        "give-feedback" => HostCommand::GiveFeedback,
        "back" => HostCommand::Back,
        "cancel" => HostCommand::Cancel,
        "rate" => HostCommand::Rate,
        "state" => HostCommand::State,
        "reason" => HostCommand::Reason(required(rest, "main reason")?.parse()?),
        "sub" => HostCommand::Sub(required(rest, "sub-reason")?.to_string()),
        "submit-negative" => HostCommand::SubmitNegative(required(rest, "feedback text")?.to_string()),
        "submit-positive" => {
            HostCommand::SubmitPositive((!rest.is_empty()).then(|| rest.to_string()))
        }
        "broken" => parse_broken(rest)?,
        other => return Err(HostError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(rest: &'a str, what: &'static str) -> Result<&'a str, HostError> {
    if rest.is_empty() {
        Err(HostError::MissingArgument(what))
    } else {
        Ok(rest)
    }
}

fn parse_broken(rest: &str) -> Result<HostCommand, HostError> {
    let (first, after) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let (url, text) = if first == "--url" {
        let after = after.trim_start();
        let (url, text) = after.split_once(char::is_whitespace).unwrap_or((after, ""));
        (Some(required(url, "url")?.to_string()), text.trim())
    } else {
        (None, rest)
    };
    Ok(HostCommand::Broken {
        text: required(text, "feedback text")?.to_string(),
        url,
    })
}
