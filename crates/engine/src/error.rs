//! The module contains the errors the engine can return.
//!
//! The computation functions (totals, breakdown, filtering, reporting) never
//! fail; errors only come from parsing user input and validating records
//! before they are stored.
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
}

impl EngineError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
