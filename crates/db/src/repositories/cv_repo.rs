//! Repository for the `cvs` table.

use sqlx::PgPool;

use crate::is_unique_violation;
use crate::models::cv::Cv;

const COLUMNS: &str = "cv_id, keycloak_id, created_at, updated_at";

/// One CV per owner.
const OWNER_UNIQUE_CONSTRAINT: &str = "uq_cvs_keycloak_id";

/// Whether `err` is a lost race on the owner key, rather than any other
/// uniqueness problem.
fn is_owner_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            is_unique_violation(err) && db_err.constraint() == Some(OWNER_UNIQUE_CONSTRAINT)
        }
        _ => false,
    }
}

/// Lazily-created CV aggregate root, one row per owner.
pub struct CvRepo;

impl CvRepo {
    /// Make sure a CV row exists for `owner_id`.
    ///
    /// Concurrent callers may race on the insert. The loser's unique
    /// violation on `uq_cvs_keycloak_id` means the row is there, so it is
    /// treated as success. Every other error propagates unchanged.
    pub async fn ensure_exists(pool: &PgPool, owner_id: &str) -> Result<(), sqlx::Error> {
        let result = sqlx::query("INSERT INTO cvs (keycloak_id) VALUES ($1)")
            .bind(owner_id)
            .execute(pool)
            .await;
        match result {
            Ok(_) => {
                tracing::info!(owner_id, "CV created");
                Ok(())
            }
            Err(err) if is_owner_conflict(&err) => {
                tracing::debug!(owner_id, "CV already exists");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Find the CV of `owner_id`.
    pub async fn find_by_owner(pool: &PgPool, owner_id: &str) -> Result<Option<Cv>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cvs WHERE keycloak_id = $1");
        sqlx::query_as::<_, Cv>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete the CV of `owner_id`. Child rows go with it through
    /// `ON DELETE CASCADE`. Returns the affected row count.
    pub async fn delete_by_owner(pool: &PgPool, owner_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cvs WHERE keycloak_id = $1")
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use cv_core::types::DbId;

    use super::*;

    async fn insert_raw(pool: &PgPool, cv_id: DbId, owner_id: &str) -> sqlx::Error {
        sqlx::query("INSERT INTO cvs (cv_id, keycloak_id) VALUES ($1, $2)")
            .bind(cv_id)
            .bind(owner_id)
            .execute(pool)
            .await
            .unwrap_err()
    }

    #[sqlx::test(migrations = "../../db/migrations")]
    async fn only_owner_key_violations_count_as_owner_conflict(pool: PgPool) {
        CvRepo::ensure_exists(&pool, "u1").await.unwrap();
        let existing = CvRepo::find_by_owner(&pool, "u1").await.unwrap().unwrap();

        let same_owner = insert_raw(&pool, DbId::new_v4(), "u1").await;
        assert!(is_owner_conflict(&same_owner));

        let same_primary_key = insert_raw(&pool, existing.cv_id, "u2").await;
        assert!(is_unique_violation(&same_primary_key));
        assert!(!is_owner_conflict(&same_primary_key));
    }

    #[test]
    fn non_database_errors_are_not_owner_conflicts() {
        assert!(!is_owner_conflict(&sqlx::Error::RowNotFound));
    }
}
