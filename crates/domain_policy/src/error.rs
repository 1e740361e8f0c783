//! Policy domain errors

use thiserror::Error;

use core_kernel::PortError;

use crate::validation::ValidationFailure;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The application broke one or more product rules
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// A token outside a closed set of values
    #[error("Unknown {field} '{value}'")]
    UnknownToken {
        field: &'static str,
        value: String,
    },

    /// Illustration does not exist or belongs to another user
    #[error("Illustration not found: {0}")]
    IllustrationNotFound(String),

    /// The illustration store failed
    #[error("Repository error: {0}")]
    Repository(#[from] PortError),
}

impl PolicyError {
    /// Creates an illustration not found error
    pub fn illustration_not_found(id: impl std::fmt::Display) -> Self {
        PolicyError::IllustrationNotFound(id.to_string())
    }
}
