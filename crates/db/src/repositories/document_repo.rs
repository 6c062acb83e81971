//! Repository for the `documents` table.

use async_trait::async_trait;
use cv_core::patch;
use cv_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::{CreateDocument, Document, UpdateDocument};
use crate::repositories::OwnedResourceRepo;

const COLUMNS: &str = "document_id, keycloak_id, name, url, created_at, updated_at";

/// Provides owner-scoped CRUD operations for documents.
pub struct DocumentRepo;

#[async_trait]
impl OwnedResourceRepo for DocumentRepo {
    const ENTITY: &'static str = "Document";

    type Record = Document;
    type Create = CreateDocument;
    type Update = UpdateDocument;

    fn record_id(record: &Document) -> DbId {
        record.document_id
    }

    async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (keycloak_id, name, url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM documents WHERE document_id = $1 AND keycloak_id = $2");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents WHERE keycloak_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET
                name = COALESCE($3, name),
                url = CASE WHEN $4 THEN $5 ELSE url END
             WHERE document_id = $1 AND keycloak_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(patch::is_present(&input.url))
            .bind(patch::new_value(&input.url).map(String::as_str))
            .fetch_optional(pool)
            .await
    }

    async fn delete_owned(pool: &PgPool, id: DbId, owner_id: &str) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM documents WHERE document_id = $1 AND keycloak_id = $2")
                .bind(id)
                .bind(owner_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
