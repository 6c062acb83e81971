//! Route definitions for a candidate's CV and its child resources.

use axum::routing::get;
use axum::Router;
use cv_core::validation::ValidatePayload;
use cv_db::repositories::{
    DocumentRepo, DocumentationRepo, EducationRepo, ExperienceRepo, LanguageRepo,
    OwnedResourceRepo,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::handlers::{cv, resource};
use crate::state::AppState;

/// Routes mounted at `/candidates/{keycloak_id}/cv`.
///
/// ```text
/// GET    /                          -> cv::get
/// PUT    /                          -> cv::ensure
/// DELETE /                          -> cv::delete
///
/// GET    /{kind}                    -> resource::list
/// POST   /{kind}                    -> resource::create
/// GET    /{kind}/{id}               -> resource::get_by_id
/// PATCH  /{kind}/{id}               -> resource::update
/// DELETE /{kind}/{id}               -> resource::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cv::get).put(cv::ensure).delete(cv::delete))
        .nest("/educations", resource_router::<EducationRepo>())
        .nest("/experiences", resource_router::<ExperienceRepo>())
        .nest("/languages", resource_router::<LanguageRepo>())
        .nest("/documents", resource_router::<DocumentRepo>())
        .nest("/documentation", resource_router::<DocumentationRepo>())
}

/// The five owner-scoped CRUD routes for one child repository.
fn resource_router<R>() -> Router<AppState>
where
    R: OwnedResourceRepo + Send + Sync + 'static,
    R::Record: Serialize + Send + 'static,
    R::Create: DeserializeOwned + ValidatePayload + Send + 'static,
    R::Update: DeserializeOwned + ValidatePayload + Send + 'static,
{
    Router::new()
        .route("/", get(resource::list::<R>).post(resource::create::<R>))
        .route(
            "/{id}",
            get(resource::get_by_id::<R>)
                .patch(resource::update::<R>)
                .delete(resource::delete::<R>),
        )
}
