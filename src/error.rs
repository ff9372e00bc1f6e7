//! Error types for the operations kernel.
//!
//! Every failure the kernel can report is a flavour of invalid input.
//! Absence (empty queue, missing key, target not found) is never an
//! error; it is returned as `None` or a `found() == false` outcome.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KernelError>;

/// Errors raised when an operation is handed malformed input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Generic malformed argument.
    #[error("invalid input to {operation}: {reason}")]
    InvalidInput {
        operation: &'static str,
        reason: String,
    },

    /// Queue priority outside the configured bounds.
    #[error("priority {priority} outside allowed range [{min}, {}]", .max.map_or("unbounded".to_string(), |m| m.to_string()))]
    PriorityOutOfRange {
        priority: i64,
        min: i64,
        max: Option<i64>,
    },

    /// A key comparison had no defined ordering (e.g. NaN).
    #[error("search key at index {index} is not comparable with the target")]
    IncomparableKey { index: usize },

    /// An interval that cannot take part in scheduling.
    #[error("invalid interval {id:?}: {reason}")]
    InvalidInterval { id: String, reason: String },

    /// A configuration struct failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl KernelError {
    /// Whether this error belongs to the invalid-input kind.
    ///
    /// Always true today; kept as a method so callers can branch on the
    /// kind without matching every variant.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            KernelError::InvalidInput { .. }
                | KernelError::PriorityOutOfRange { .. }
                | KernelError::IncomparableKey { .. }
                | KernelError::InvalidInterval { .. }
                | KernelError::InvalidConfig(_)
        )
    }

    pub(crate) fn invalid_input(operation: &'static str, reason: impl Into<String>) -> Self {
        KernelError::InvalidInput {
            operation,
            reason: reason.into(),
        }
    }
}
