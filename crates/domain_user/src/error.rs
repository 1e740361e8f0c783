//! User domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the user domain
#[derive(Debug, Error)]
pub enum UserError {
    /// The registration form was incomplete or malformed
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Another account already uses the username
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password hashing or verification could not run
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// The user store failed
    #[error("Repository error: {0}")]
    Repository(#[from] PortError),
}

impl From<bcrypt::BcryptError> for UserError {
    fn from(error: bcrypt::BcryptError) -> Self {
        UserError::Hashing(error.to_string())
    }
}

impl From<tokio::task::JoinError> for UserError {
    fn from(error: tokio::task::JoinError) -> Self {
        UserError::Hashing(error.to_string())
    }
}
