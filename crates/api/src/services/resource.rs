//! Generic owner-scoped CRUD over any [`OwnedResourceRepo`].
//!
//! The owner id passed in here has already been checked against the caller
//! by the handler. Every query below is additionally filtered by it, so a
//! record owned by someone else is indistinguishable from a missing one.

use cv_core::error::CoreError;
use cv_core::types::DbId;
use cv_db::repositories::{CvRepo, OwnedResourceRepo};
use cv_db::DbPool;

use crate::error::AppResult;

/// Create a record for `owner_id`, creating the owner's CV first if needed.
pub async fn create<R: OwnedResourceRepo>(
    pool: &DbPool,
    owner_id: &str,
    input: &R::Create,
) -> AppResult<R::Record> {
    CvRepo::ensure_exists(pool, owner_id).await?;
    let record = R::create(pool, owner_id, input).await?;
    tracing::info!(
        entity = R::ENTITY,
        owner_id,
        id = %R::record_id(&record),
        "Resource created"
    );
    Ok(record)
}

/// Fetch one record of `owner_id`.
pub async fn find_owned<R: OwnedResourceRepo>(
    pool: &DbPool,
    id: DbId,
    owner_id: &str,
) -> AppResult<R::Record> {
    let record = R::find_owned(pool, id, owner_id).await?;
    tracing::debug!(entity = R::ENTITY, owner_id, %id, found = record.is_some(), "Resource lookup");
    record.ok_or_else(|| CoreError::not_found(R::ENTITY, id).into())
}

/// All records of `owner_id`. An owner without a CV simply has none.
pub async fn list_owned<R: OwnedResourceRepo>(
    pool: &DbPool,
    owner_id: &str,
) -> AppResult<Vec<R::Record>> {
    let records = R::list_by_owner(pool, owner_id).await?;
    tracing::debug!(entity = R::ENTITY, owner_id, count = records.len(), "Resources listed");
    Ok(records)
}

/// Apply a partial update to one record of `owner_id`.
pub async fn update_owned<R: OwnedResourceRepo>(
    pool: &DbPool,
    id: DbId,
    owner_id: &str,
    input: &R::Update,
) -> AppResult<R::Record> {
    let record = R::update_owned(pool, id, owner_id, input)
        .await?
        .ok_or_else(|| CoreError::not_found(R::ENTITY, id))?;
    tracing::debug!(entity = R::ENTITY, owner_id, %id, "Resource updated");
    Ok(record)
}

/// Delete one record of `owner_id`.
pub async fn delete_owned<R: OwnedResourceRepo>(
    pool: &DbPool,
    id: DbId,
    owner_id: &str,
) -> AppResult<()> {
    if R::delete_owned(pool, id, owner_id).await? == 0 {
        return Err(CoreError::not_found(R::ENTITY, id).into());
    }
    tracing::info!(entity = R::ENTITY, owner_id, %id, "Resource deleted");
    Ok(())
}
