//! Step language of request scripts.
//!
//! A script is a list of strings, one step per round:
//!
//! | Step | Effect |
//! |---|---|
//! | `start` | start (or restart) the request |
//! | `ok:<data>` | the latest request succeeds with `<data>` |
//! | `fail:<error>` | the latest request fails with `<error>` |
//! | `reset` | forget the request |
//! | `wait` | nothing happens this round |
//!
//! Keywords are case-insensitive. Whitespace around the keyword and the
//! payload is ignored.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors parsing a step string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("unknown step: {0:?}")]
    Unknown(String),
    #[error("step {0:?} needs a payload after ':'")]
    MissingPayload(&'static str),
}

/// A single scripted event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Step {
    Start,
    Ok(String),
    Fail(String),
    Reset,
    Wait,
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keyword, payload) = match s.split_once(':') {
            Some((keyword, payload)) => (keyword, Some(payload.trim())),
            None => (s, None),
        };

        match (keyword.trim().to_ascii_lowercase().as_str(), payload) {
            ("start", None) => Ok(Step::Start),
            ("reset", None) => Ok(Step::Reset),
            ("wait", None) => Ok(Step::Wait),
            ("ok", Some(data)) if !data.is_empty() => Ok(Step::Ok(data.to_string())),
            ("fail", Some(err)) if !err.is_empty() => Ok(Step::Fail(err.to_string())),
            ("ok", _) => Err(StepError::MissingPayload("ok")),
            ("fail", _) => Err(StepError::MissingPayload("fail")),
            _ => Err(StepError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Step {
    type Error = StepError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Start => f.write_str("start"),
            Step::Ok(data) => write!(f, "ok:{data}"),
            Step::Fail(err) => write!(f, "fail:{err}"),
            Step::Reset => f.write_str("reset"),
            Step::Wait => f.write_str("wait"),
        }
    }
}
