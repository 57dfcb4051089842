//! Field validation failures.

use crate::form::Field;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which rule produced a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    MinLength,
    Email,
    Number,
    Integer,
    Min,
}

/// A single field that failed validation, with the message to show.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub kind: RuleKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}
