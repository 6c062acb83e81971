//! Generic handlers for `/candidates/{keycloak_id}/cv/{kind}[/{id}]`.
//!
//! Each handler is instantiated once per child repository in
//! [`crate::routes::cv`]. The path owner id is checked against the caller
//! before anything touches storage; on mismatch the handler answers with the
//! very error a missing record would produce.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cv_core::error::CoreError;
use cv_core::ownership;
use cv_core::types::DbId;
use cv_core::validation::ValidatePayload;
use cv_db::repositories::OwnedResourceRepo;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{PathParams, ValidatedJson};
use crate::middleware::rbac::RequireCandidate;
use crate::response::DataResponse;
use crate::services::resource as service;
use crate::state::AppState;

/// Collection routes have no record id yet, so a foreign owner id is reported
/// as a missing CV.
fn guard_collection(caller_id: &str, keycloak_id: &str) -> Result<(), CoreError> {
    ownership::is_owner_or_fail(caller_id, keycloak_id, CoreError::not_found("Cv", keycloak_id))
}

fn guard_record<R: OwnedResourceRepo>(
    caller_id: &str,
    keycloak_id: &str,
    id: DbId,
) -> Result<(), CoreError> {
    ownership::is_owner_or_fail(caller_id, keycloak_id, CoreError::not_found(R::ENTITY, id))
}

/// POST /api/v1/candidates/{keycloak_id}/cv/{kind}
pub async fn create<R>(
    RequireCandidate(user): RequireCandidate,
    State(state): State<AppState>,
    PathParams(keycloak_id): PathParams<String>,
    ValidatedJson(input): ValidatedJson<R::Create>,
) -> AppResult<(StatusCode, Json<DataResponse<R::Record>>)>
where
    R: OwnedResourceRepo + Send + Sync + 'static,
    R::Record: Serialize + Send + 'static,
    R::Create: DeserializeOwned + ValidatePayload + Send + 'static,
{
    guard_collection(&user.owner_id, &keycloak_id)?;
    let record = service::create::<R>(&state.pool, &keycloak_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /api/v1/candidates/{keycloak_id}/cv/{kind}
pub async fn list<R>(
    RequireCandidate(user): RequireCandidate,
    State(state): State<AppState>,
    PathParams(keycloak_id): PathParams<String>,
) -> AppResult<Json<DataResponse<Vec<R::Record>>>>
where
    R: OwnedResourceRepo + Send + Sync + 'static,
    R::Record: Serialize + Send + 'static,
{
    guard_collection(&user.owner_id, &keycloak_id)?;
    let records = service::list_owned::<R>(&state.pool, &keycloak_id).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/candidates/{keycloak_id}/cv/{kind}/{id}
pub async fn get_by_id<R>(
    RequireCandidate(user): RequireCandidate,
    State(state): State<AppState>,
    PathParams((keycloak_id, id)): PathParams<(String, DbId)>,
) -> AppResult<Json<DataResponse<R::Record>>>
where
    R: OwnedResourceRepo + Send + Sync + 'static,
    R::Record: Serialize + Send + 'static,
{
    guard_record::<R>(&user.owner_id, &keycloak_id, id)?;
    let record = service::find_owned::<R>(&state.pool, id, &keycloak_id).await?;
    Ok(Json(DataResponse { data: record }))
}

/// PATCH /api/v1/candidates/{keycloak_id}/cv/{kind}/{id}
pub async fn update<R>(
    RequireCandidate(user): RequireCandidate,
    State(state): State<AppState>,
    PathParams((keycloak_id, id)): PathParams<(String, DbId)>,
    ValidatedJson(input): ValidatedJson<R::Update>,
) -> AppResult<Json<DataResponse<R::Record>>>
where
    R: OwnedResourceRepo + Send + Sync + 'static,
    R::Record: Serialize + Send + 'static,
    R::Update: DeserializeOwned + ValidatePayload + Send + 'static,
{
    guard_record::<R>(&user.owner_id, &keycloak_id, id)?;
    let record = service::update_owned::<R>(&state.pool, id, &keycloak_id, &input).await?;
    Ok(Json(DataResponse { data: record }))
}

/// DELETE /api/v1/candidates/{keycloak_id}/cv/{kind}/{id}
pub async fn delete<R>(
    RequireCandidate(user): RequireCandidate,
    State(state): State<AppState>,
    PathParams((keycloak_id, id)): PathParams<(String, DbId)>,
) -> AppResult<StatusCode>
where
    R: OwnedResourceRepo + Send + Sync + 'static,
{
    guard_record::<R>(&user.owner_id, &keycloak_id, id)?;
    service::delete_owned::<R>(&state.pool, id, &keycloak_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use cv_db::repositories::EducationRepo;

    use super::*;

    #[test]
    fn record_guard_reports_the_record_as_missing() {
        let id = DbId::new_v4();
        let err = guard_record::<EducationRepo>("u2", "u1", id).unwrap_err();
        assert_matches!(
            err,
            CoreError::NotFound { entity: "Education", id: ref reported }
                if *reported == id.to_string()
        );
    }

    #[test]
    fn collection_guard_reports_the_cv_as_missing() {
        let err = guard_collection("u2", "u1").unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Cv", ref id } if id == "u1");
    }

    #[test]
    fn guards_pass_for_the_owner() {
        assert!(guard_collection("u1", "u1").is_ok());
        assert!(guard_record::<EducationRepo>("u1", "u1", DbId::new_v4()).is_ok());
    }
}
