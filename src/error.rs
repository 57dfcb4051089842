//! Guard rejections and builder errors.

use crate::form::{FormPhase, SubmissionId};
use thiserror::Error;

/// A form operation was refused. The form state is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("form cannot be submitted from phase '{phase}'")]
    NotSubmittable { phase: FormPhase },

    #[error("submission {id} is not the one in flight")]
    StaleSubmission { id: SubmissionId },
}

/// Errors raised while building schemas and submit configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Schema has no rules. Declare at least one field with .field(..)")]
    EmptySchema,

    #[error("Endpoint URL not specified. Call .endpoint(url) before .build()")]
    MissingEndpoint,

    #[error("Endpoint URL '{url}' is invalid: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Timeout '{value}' is not a number of milliseconds")]
    InvalidTimeout { value: String },
}
