//! The shape shared by every owner-scoped CV child resource.

use async_trait::async_trait;
use cv_core::types::DbId;
use sqlx::PgPool;

/// Storage primitives for a child resource scoped by owner id.
///
/// Implementations never look a row up by id alone: the owner id is part of
/// every filter, so a row owned by someone else behaves exactly like a
/// missing row.
#[async_trait]
pub trait OwnedResourceRepo {
    /// Entity name reported in not-found errors.
    const ENTITY: &'static str;

    /// The stored row.
    type Record: Send + Unpin;
    /// Creation payload.
    type Create: Sync;
    /// Partial-update payload.
    type Update: Sync;

    /// Primary key of a stored row.
    fn record_id(record: &Self::Record) -> DbId;

    /// Insert a new row owned by `owner_id`, returning it with its generated
    /// id and timestamps. The parent CV row must already exist.
    async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &Self::Create,
    ) -> Result<Self::Record, sqlx::Error>;

    /// Find a row matching both `id` and `owner_id`.
    async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
    ) -> Result<Option<Self::Record>, sqlx::Error>;

    /// List every row of `owner_id`.
    async fn list_by_owner(pool: &PgPool, owner_id: &str)
        -> Result<Vec<Self::Record>, sqlx::Error>;

    /// Apply a partial update to the row matching `id` and `owner_id`.
    ///
    /// Returns `None` when no row matched.
    async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
        input: &Self::Update,
    ) -> Result<Option<Self::Record>, sqlx::Error>;

    /// Delete the row matching `id` and `owner_id`. Returns the affected row count.
    async fn delete_owned(pool: &PgPool, id: DbId, owner_id: &str) -> Result<u64, sqlx::Error>;
}
