//! Work experience entity model and DTOs.

use cv_core::additional_document::AdditionalDocument;
use cv_core::patch::double_option;
use cv_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub experience_id: DbId,
    pub keycloak_id: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub details: CreateExperience,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new experience. Also embedded in [`Experience`].
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateExperience {
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,
    #[validate(length(min = 1, max = 255))]
    pub position: String,
    #[validate(length(min = 1, max = 255))]
    pub country: String,
    #[validate(length(min = 1, max = 255))]
    pub category: String,
    pub start_date: Date,
    /// `None` while the position is current.
    pub end_date: Option<Date>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[serde(default)]
    #[sqlx(json)]
    #[validate(nested)]
    pub additional_documents: Vec<AdditionalDocument>,
}

/// DTO for a partial update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateExperience {
    #[validate(length(min = 1, max = 255))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub position: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub country: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub category: Option<String>,
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<Date>>,
    #[validate(length(max = 2000))]
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[validate(nested)]
    pub additional_documents: Option<Vec<AdditionalDocument>>,
}

