//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid identifier '{0}'")]
    InvalidIdentifier(String),
}

impl CoreError {
    pub fn invalid_date(value: impl Into<String>) -> Self {
        CoreError::InvalidDate(value.into())
    }

    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        CoreError::InvalidIdentifier(value.into())
    }
}
