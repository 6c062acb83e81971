//! Role-based access control (RBAC) extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use cv_core::error::CoreError;
use cv_core::roles::ROLE_CANDIDATE;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `candidate` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn candidate_only(RequireCandidate(user): RequireCandidate) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireCandidate(pub AuthUser);

impl FromRequestParts<AppState> for RequireCandidate {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_CANDIDATE {
            return Err(AppError::Core(CoreError::Forbidden(
                "Candidate role required".into(),
            )));
        }
        Ok(RequireCandidate(user))
    }
}
