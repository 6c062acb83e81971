//! Repository for the `educations` table.

use async_trait::async_trait;
use cv_core::patch;
use cv_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::education::{CreateEducation, Education, UpdateEducation};
use crate::repositories::OwnedResourceRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "education_id, keycloak_id, center_type, country, center_name, title, \
     category, start_date, end_date, description, additional_documents, created_at, updated_at";

/// Provides owner-scoped CRUD operations for educations.
pub struct EducationRepo;

#[async_trait]
impl OwnedResourceRepo for EducationRepo {
    const ENTITY: &'static str = "Education";

    type Record = Education;
    type Create = CreateEducation;
    type Update = UpdateEducation;

    fn record_id(record: &Education) -> DbId {
        record.education_id
    }

    async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &CreateEducation,
    ) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO educations
                (keycloak_id, center_type, country, center_name, title, category,
                 start_date, end_date, description, additional_documents)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(owner_id)
            .bind(&input.center_type)
            .bind(&input.country)
            .bind(&input.center_name)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(Json(&input.additional_documents))
            .fetch_one(pool)
            .await
    }

    async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM educations WHERE education_id = $1 AND keycloak_id = $2"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM educations
             WHERE keycloak_id = $1
             ORDER BY start_date DESC, created_at ASC"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Only non-`None` fields in `input` are applied. `end_date` and
    /// `description` are overwritten (possibly with NULL) only when the patch
    /// carries them.
    async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
        input: &UpdateEducation,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE educations SET
                center_type = COALESCE($3, center_type),
                country = COALESCE($4, country),
                center_name = COALESCE($5, center_name),
                title = COALESCE($6, title),
                category = COALESCE($7, category),
                start_date = COALESCE($8, start_date),
                end_date = CASE WHEN $9 THEN $10 ELSE end_date END,
                description = CASE WHEN $11 THEN $12 ELSE description END,
                additional_documents = COALESCE($13, additional_documents)
             WHERE education_id = $1 AND keycloak_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.center_type)
            .bind(&input.country)
            .bind(&input.center_name)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.start_date)
            .bind(patch::is_present(&input.end_date))
            .bind(patch::new_value(&input.end_date).copied())
            .bind(patch::is_present(&input.description))
            .bind(patch::new_value(&input.description).map(String::as_str))
            .bind(input.additional_documents.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    async fn delete_owned(pool: &PgPool, id: DbId, owner_id: &str) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM educations WHERE education_id = $1 AND keycloak_id = $2")
                .bind(id)
                .bind(owner_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
