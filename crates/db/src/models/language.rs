//! Spoken language entity model and DTOs.

use cv_core::additional_document::AdditionalDocument;
use cv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `languages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub language_id: DbId,
    pub keycloak_id: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub details: CreateLanguage,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new language entry. Also embedded in [`Language`].
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateLanguage {
    #[validate(length(min = 1, max = 255))]
    pub language: String,
    /// Free text, typically a CEFR level such as `B2`.
    #[validate(length(min = 1, max = 255))]
    pub level: String,
    #[serde(default)]
    #[sqlx(json)]
    #[validate(nested)]
    pub additional_documents: Vec<AdditionalDocument>,
}

/// DTO for a partial update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateLanguage {
    #[validate(length(min = 1, max = 255))]
    pub language: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub level: Option<String>,
    #[validate(nested)]
    pub additional_documents: Option<Vec<AdditionalDocument>>,
}

