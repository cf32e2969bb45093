//! Error types for Foucault.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Foucault operations.
pub type Result<T> = std::result::Result<T, FoucaultError>;

/// Errors that can occur in Foucault.
#[derive(Debug, Error)]
pub enum FoucaultError {
    /// A vector was divided by zero (directly or while normalizing).
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// Operation that attempted the division.
        operation: &'static str,
    },

    /// The sample buffer could not grow its storage.
    #[error("Could not reallocate sample buffer to {requested} samples")]
    Allocation {
        /// Capacity that was requested.
        requested: usize,
        /// Underlying allocator error.
        #[source]
        source: std::collections::TryReserveError,
    },

    /// Writing exported samples failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FoucaultError {
    /// Create a DivisionByZero error.
    pub fn division_by_zero(operation: &'static str) -> Self {
        Self::DivisionByZero { operation }
    }

    /// Create an Allocation error.
    pub fn allocation(requested: usize, source: std::collections::TryReserveError) -> Self {
        Self::Allocation { requested, source }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
