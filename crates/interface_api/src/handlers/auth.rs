//! Registration and login handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use domain_user::RegistrationForm;
use tracing::debug;

use crate::auth::create_token;
use crate::dto::auth::{LoginRequest, LoginResponse, MessageResponse, REGISTERED};
use crate::error::{ApiError, LOGIN_FAILED, REGISTRATION_FAILED};
use crate::AppState;

fn read_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Unreadable auth body");
        ApiError::Validation(vec![rejection.body_text()])
    })
}

/// Creates an account; the caller logs in separately
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegistrationForm>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let form = read_body(body)?;

    state
        .users
        .register(form)
        .await
        .map_err(|e| ApiError::from_user_error(e, REGISTRATION_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: REGISTERED,
        }),
    ))
}

/// Checks credentials and issues a token carrying the user's id
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = read_body(body)?;

    let user = state
        .users
        .authenticate(&request.username, &request.password)
        .await
        .map_err(|e| ApiError::from_user_error(e, LOGIN_FAILED))?;

    let token = create_token(
        user.id.as_str(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|e| ApiError::Internal {
        message: LOGIN_FAILED.to_string(),
        error: e.to_string(),
    })?;

    Ok(Json(LoginResponse { token }))
}
