//! Repository for the `experiences` table.

use async_trait::async_trait;
use cv_core::patch;
use cv_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::experience::{CreateExperience, Experience, UpdateExperience};
use crate::repositories::OwnedResourceRepo;

const COLUMNS: &str = "experience_id, keycloak_id, company_name, position, country, category, \
     start_date, end_date, description, additional_documents, created_at, updated_at";

/// Provides owner-scoped CRUD operations for work experiences.
pub struct ExperienceRepo;

#[async_trait]
impl OwnedResourceRepo for ExperienceRepo {
    const ENTITY: &'static str = "Experience";

    type Record = Experience;
    type Create = CreateExperience;
    type Update = UpdateExperience;

    fn record_id(record: &Experience) -> DbId {
        record.experience_id
    }

    async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &CreateExperience,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences
                (keycloak_id, company_name, position, country, category,
                 start_date, end_date, description, additional_documents)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(owner_id)
            .bind(&input.company_name)
            .bind(&input.position)
            .bind(&input.country)
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
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM experiences WHERE experience_id = $1 AND keycloak_id = $2"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM experiences
             WHERE keycloak_id = $1
             ORDER BY start_date DESC, created_at ASC"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: &str,
        input: &UpdateExperience,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "UPDATE experiences SET
                company_name = COALESCE($3, company_name),
                position = COALESCE($4, position),
                country = COALESCE($5, country),
                category = COALESCE($6, category),
                start_date = COALESCE($7, start_date),
                end_date = CASE WHEN $8 THEN $9 ELSE end_date END,
                description = CASE WHEN $10 THEN $11 ELSE description END,
                additional_documents = COALESCE($12, additional_documents)
             WHERE experience_id = $1 AND keycloak_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.company_name)
            .bind(&input.position)
            .bind(&input.country)
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
            sqlx::query("DELETE FROM experiences WHERE experience_id = $1 AND keycloak_id = $2")
                .bind(id)
                .bind(owner_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
