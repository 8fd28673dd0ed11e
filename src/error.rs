//! Custom error types for budget-saver
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget-saver operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors on the report file
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("{0}")]
    Validation(String),

    /// Saving request larger than what is left of the budget
    #[error("You cannot put aside more than your remaining budget (requested {needed}, remaining {available}).")]
    InsufficientFunds { needed: Money, available: Money },

    /// Date parsing errors
    #[error("Invalid date '{input}': expected dd-mm-yyyy")]
    DateParse { input: String },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// Standard input reached end-of-file while a prompt was waiting
    #[error("Input stream closed")]
    InputClosed,
}

impl BudgetError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InsufficientFunds { .. } | Self::DateParse { .. }
        )
    }

    /// Check if input has been exhausted
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-saver operations
pub type BudgetResult<T> = Result<T, BudgetError>;
