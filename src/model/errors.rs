//! # Validation Errors
//!
//! Per-invocation error type. A validation failure aborts only the current
//! call: the model stays reusable, and re-invoking with unchanged input
//! reproduces the same outcome.

use thiserror::Error;

/// Result type for validation calls
pub type ValidationResult<T> = Result<T, ValidationError>;

/// What rejected the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Required field absent from the candidate
    MissingField,
    /// Value does not match the declared type
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// A validation rule rejected the value
    Rule { name: String },
}

impl FailureKind {
    /// Stable rule identifier for the failure: `"required"` for a missing
    /// field, `"type"` for a type mismatch, otherwise the rule name.
    pub fn rule(&self) -> &str {
        match self {
            FailureKind::MissingField => "required",
            FailureKind::TypeMismatch { .. } => "type",
            FailureKind::Rule { name } => name,
        }
    }
}

/// A single validation failure: the first failing field wins and is the
/// only failure signaled for the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: String,
    kind: FailureKind,
    message: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, kind: FailureKind, message: String) -> Self {
        Self {
            field: field.into(),
            kind,
            message,
        }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// What rejected the field.
    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// Stable rule identifier (`"required"`, `"type"`, or the rule name).
    pub fn rule(&self) -> &str {
        self.kind.rule()
    }

    /// The rendered, localized message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
