//! Repository for the `documentation` table.

use async_trait::async_trait;
use cv_core::patch;
use cv_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::documentation::{CreateDocumentation, Documentation, UpdateDocumentation};
use crate::repositories::OwnedResourceRepo;

const COLUMNS: &str = "documentation_id, keycloak_id, name, description, \
     additional_documentation, created_at, updated_at";

/// Provides owner-scoped CRUD operations for documentation entries.
pub struct DocumentationRepo;

#[async_trait]
impl OwnedResourceRepo for DocumentationRepo {
    const ENTITY: &'static str = "Documentation";

    type Record = Documentation;
    type Create = CreateDocumentation;
    type Update = UpdateDocumentation;

    fn record_id(record: &Documentation) -> DbId {
        record.documentation_id
    }

    async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &CreateDocumentation,
    ) -> Result<Documentation, sqlx::Error> {
        let query = format!(
            "INSERT INTO documentation (keycloak_id, name, description, additional_documentation)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Documentation>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(Json(&input.additional_documentation))
            .fetch_one(pool)
            .await
    }

    async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
    ) -> Result<Option<Documentation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documentation WHERE documentation_id = $1 AND keycloak_id = $2"
        );
        sqlx::query_as::<_, Documentation>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    async fn list_by_owner(
        pool: &PgPool,
        owner_id: &str,
    ) -> Result<Vec<Documentation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documentation WHERE keycloak_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Documentation>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
        input: &UpdateDocumentation,
    ) -> Result<Option<Documentation>, sqlx::Error> {
        let query = format!(
            "UPDATE documentation SET
                name = COALESCE($3, name),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                additional_documentation = COALESCE($6, additional_documentation)
             WHERE documentation_id = $1 AND keycloak_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Documentation>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(patch::is_present(&input.description))
            .bind(patch::new_value(&input.description).map(String::as_str))
            .bind(input.additional_documentation.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    async fn delete_owned(pool: &PgPool, id: DbId, owner_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM documentation WHERE documentation_id = $1 AND keycloak_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
