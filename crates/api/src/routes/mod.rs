pub mod cv;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /candidates/{keycloak_id}/cv                   CV aggregate (get, ensure, delete)
/// /candidates/{keycloak_id}/cv/educations        education CRUD
/// /candidates/{keycloak_id}/cv/experiences       experience CRUD
/// /candidates/{keycloak_id}/cv/languages         language CRUD
/// /candidates/{keycloak_id}/cv/documents         document CRUD
/// /candidates/{keycloak_id}/cv/documentation     documentation CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/candidates/{keycloak_id}/cv", cv::router())
}
