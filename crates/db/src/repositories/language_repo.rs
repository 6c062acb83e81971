//! Repository for the `languages` table.

use async_trait::async_trait;
use cv_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::language::{CreateLanguage, Language, UpdateLanguage};
use crate::repositories::OwnedResourceRepo;

const COLUMNS: &str =
    "language_id, keycloak_id, language, level, additional_documents, created_at, updated_at";

/// Provides owner-scoped CRUD operations for spoken languages.
pub struct LanguageRepo;

#[async_trait]
impl OwnedResourceRepo for LanguageRepo {
    const ENTITY: &'static str = "Language";

    type Record = Language;
    type Create = CreateLanguage;
    type Update = UpdateLanguage;

    fn record_id(record: &Language) -> DbId {
        record.language_id
    }

    async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &CreateLanguage,
    ) -> Result<Language, sqlx::Error> {
        let query = format!(
            "INSERT INTO languages (keycloak_id, language, level, additional_documents)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Language>(&query)
            .bind(owner_id)
            .bind(&input.language)
            .bind(&input.level)
            .bind(Json(&input.additional_documents))
            .fetch_one(pool)
            .await
    }

    async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
    ) -> Result<Option<Language>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM languages WHERE language_id = $1 AND keycloak_id = $2");
        sqlx::query_as::<_, Language>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Language>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM languages WHERE keycloak_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Language>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
        input: &UpdateLanguage,
    ) -> Result<Option<Language>, sqlx::Error> {
        let query = format!(
            "UPDATE languages SET
                language = COALESCE($3, language),
                level = COALESCE($4, level),
                additional_documents = COALESCE($5, additional_documents)
             WHERE language_id = $1 AND keycloak_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Language>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.language)
            .bind(&input.level)
            .bind(input.additional_documents.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    async fn delete_owned(pool: &PgPool, id: DbId, owner_id: &str) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM languages WHERE language_id = $1 AND keycloak_id = $2")
                .bind(id)
                .bind(owner_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
