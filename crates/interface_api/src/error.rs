//! API error handling
//!
//! Response bodies keep the shapes existing clients parse: a `message`,
//! plus `errors` for validation failures or `error` for internal ones.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_policy::PolicyError;
use domain_user::UserError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::AuthError;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const POLICY_NOT_FOUND: &str = "Policy not found";
pub const CALCULATION_FAILED: &str = "Error calculating policy";
pub const RETRIEVAL_FAILED: &str = "Error retrieving policy";
pub const USERNAME_TAKEN: &str = "Username already exists";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const REGISTRATION_FAILED: &str = "Error registering user";
pub const LOGIN_FAILED: &str = "Error logging in";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access token required")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("{message}: {error}")]
    Internal { message: String, error: String },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiError {
    /// Translates a domain error, using `context` as the message of a 500
    pub fn from_policy_error(err: PolicyError, context: &str) -> Self {
        match err {
            PolicyError::Validation(failure) => ApiError::Validation(failure.errors),
            PolicyError::IllustrationNotFound(_) => ApiError::NotFound(POLICY_NOT_FOUND.to_string()),
            PolicyError::Repository(port) if port.is_not_found() => {
                ApiError::NotFound(POLICY_NOT_FOUND.to_string())
            }
            other => ApiError::Internal {
                message: context.to_string(),
                error: other.to_string(),
            },
        }
    }
}

impl ApiError {
    /// Translates a user domain error, using `context` as the message of a 500
    pub fn from_user_error(err: UserError, context: &str) -> Self {
        match err {
            UserError::Validation(errors) => ApiError::Validation(errors),
            UserError::UsernameTaken(_) => ApiError::BadRequest(USERNAME_TAKEN.to_string()),
            UserError::InvalidCredentials => ApiError::InvalidCredentials,
            other => ApiError::Internal {
                message: context.to_string(),
                error: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                message_only("Access token required".to_string()),
            ),
            ApiError::InvalidToken => {
                (StatusCode::FORBIDDEN, message_only("Invalid token".to_string()))
            }
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                message_only(INVALID_CREDENTIALS.to_string()),
            ),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message_only(message)),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: VALIDATION_FAILED.to_string(),
                    errors: Some(errors),
                    error: None,
                },
            ),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message_only(message)),
            ApiError::Unavailable(reason) => (StatusCode::SERVICE_UNAVAILABLE, message_only(reason)),
            ApiError::Internal { message, error: cause } => {
                error!(%message, error = %cause, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message,
                        errors: None,
                        error: Some(cause),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

fn message_only(message: String) -> ErrorResponse {
    ErrorResponse {
        message,
        errors: None,
        error: None,
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => ApiError::MissingToken,
            _ => ApiError::InvalidToken,
        }
    }
}
