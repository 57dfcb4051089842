//! Submission failures.

use std::time::Duration;
use thiserror::Error;

/// Why a submission did not succeed.
///
/// Every variant is recoverable: the form is unlocked and the user may retry
/// with the same values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint answered with status {status}")]
    Status { status: u16 },

    #[error("no answer within {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for SubmitError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => SubmitError::Status {
                status: status.as_u16(),
            },
            None => SubmitError::Transport(error.to_string()),
        }
    }
}
