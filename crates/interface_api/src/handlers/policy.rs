//! Policy handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use core_kernel::IllustrationId;
use domain_policy::{ApplicationForm, Illustration};
use tracing::debug;

use crate::auth::Claims;
use crate::dto::policy::CalculateResponse;
use crate::error::{ApiError, CALCULATION_FAILED, POLICY_NOT_FOUND, RETRIEVAL_FAILED};
use crate::AppState;

/// Validates an application, projects its benefits and stores the illustration
pub async fn calculate(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<ApplicationForm>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(form) = body.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Unreadable calculation body");
        ApiError::Validation(vec![rejection.body_text()])
    })?;

    let illustration = state
        .service
        .calculate(&claims.user(), &form)
        .await
        .map_err(|e| ApiError::from_policy_error(e, CALCULATION_FAILED))?;

    Ok(Json(illustration.into()))
}

/// Gets one of the caller's illustrations by id
pub async fn get_illustration(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(policy_id): Path<String>,
) -> Result<Json<Illustration>, ApiError> {
    let id: IllustrationId = policy_id
        .parse()
        .map_err(|_| ApiError::NotFound(POLICY_NOT_FOUND.to_string()))?;

    let illustration = state
        .service
        .get(&claims.user(), id)
        .await
        .map_err(|e| ApiError::from_policy_error(e, RETRIEVAL_FAILED))?;

    Ok(Json(illustration))
}
