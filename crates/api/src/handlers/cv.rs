//! Handlers for the `/candidates/{keycloak_id}/cv` aggregate.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cv_core::error::CoreError;
use cv_core::ownership;
use cv_db::models::cv::{Cv, CvWithResources};

use crate::error::AppResult;
use crate::extract::PathParams;
use crate::middleware::rbac::RequireCandidate;
use crate::response::DataResponse;
use crate::services::cv as service;
use crate::state::AppState;

fn guard(caller_id: &str, keycloak_id: &str) -> Result<(), CoreError> {
    ownership::is_owner_or_fail(caller_id, keycloak_id, CoreError::not_found("Cv", keycloak_id))
}

/// GET /api/v1/candidates/{keycloak_id}/cv
pub async fn get(
    RequireCandidate(user): RequireCandidate,
    State(state): State<AppState>,
    PathParams(keycloak_id): PathParams<String>,
) -> AppResult<Json<DataResponse<CvWithResources>>> {
    guard(&user.owner_id, &keycloak_id)?;
    let cv = service::find_with_resources(&state.pool, &keycloak_id).await?;
    Ok(Json(DataResponse { data: cv }))
}

/// PUT /api/v1/candidates/{keycloak_id}/cv
///
/// Idempotent: repeated calls return the same CV.
pub async fn ensure(
    RequireCandidate(user): RequireCandidate,
    State(state): State<AppState>,
    PathParams(keycloak_id): PathParams<String>,
) -> AppResult<Json<DataResponse<Cv>>> {
    guard(&user.owner_id, &keycloak_id)?;
    let cv = service::ensure_exists(&state.pool, &keycloak_id).await?;
    Ok(Json(DataResponse { data: cv }))
}

/// DELETE /api/v1/candidates/{keycloak_id}/cv
pub async fn delete(
    RequireCandidate(user): RequireCandidate,
    State(state): State<AppState>,
    PathParams(keycloak_id): PathParams<String>,
) -> AppResult<StatusCode> {
    guard(&user.owner_id, &keycloak_id)?;
    service::delete_owner(&state.pool, &keycloak_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
