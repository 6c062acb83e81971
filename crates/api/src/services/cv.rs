//! CV aggregate operations.

use cv_core::error::CoreError;
use cv_db::models::cv::{Cv, CvWithResources};
use cv_db::repositories::{
    CvRepo, DocumentRepo, DocumentationRepo, EducationRepo, ExperienceRepo, LanguageRepo,
    OwnedResourceRepo,
};
use cv_db::DbPool;

use crate::error::{AppError, AppResult};

const ENTITY: &str = "Cv";

/// Create the CV of `owner_id` if it is missing, then return it.
pub async fn ensure_exists(pool: &DbPool, owner_id: &str) -> AppResult<Cv> {
    CvRepo::ensure_exists(pool, owner_id).await?;
    // The row was just created or already there; a miss means it was deleted
    // concurrently.
    find_by_owner(pool, owner_id).await
}

pub async fn find_by_owner(pool: &DbPool, owner_id: &str) -> AppResult<Cv> {
    CvRepo::find_by_owner(pool, owner_id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, owner_id).into())
}

/// The CV of `owner_id` with every child list, each loaded through its own
/// owner-filtered query.
pub async fn find_with_resources(pool: &DbPool, owner_id: &str) -> AppResult<CvWithResources> {
    let cv = find_by_owner(pool, owner_id).await?;
    let (educations, experiences, languages, documents, documentation) = tokio::try_join!(
        EducationRepo::list_by_owner(pool, owner_id),
        ExperienceRepo::list_by_owner(pool, owner_id),
        LanguageRepo::list_by_owner(pool, owner_id),
        DocumentRepo::list_by_owner(pool, owner_id),
        DocumentationRepo::list_by_owner(pool, owner_id),
    )
    .map_err(AppError::Database)?;

    Ok(CvWithResources {
        cv,
        educations,
        experiences,
        languages,
        documents,
        documentation,
    })
}

/// Delete the CV of `owner_id`. Child rows are removed by the cascade.
pub async fn delete_owner(pool: &DbPool, owner_id: &str) -> AppResult<()> {
    if CvRepo::delete_by_owner(pool, owner_id).await? == 0 {
        return Err(CoreError::not_found(ENTITY, owner_id).into());
    }
    tracing::info!(owner_id, "CV deleted");
    Ok(())
}
