//! Documentation entity model and DTOs.
//!
//! A documentation entry groups official paperwork (work permits, driving
//! licences) under one name with an inline list of attachments.

use cv_core::additional_document::AdditionalDocument;
use cv_core::patch::double_option;
use cv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `documentation` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentation {
    pub documentation_id: DbId,
    pub keycloak_id: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub details: CreateDocumentation,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a documentation entry. Also embedded in [`Documentation`].
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDocumentation {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[serde(default)]
    #[sqlx(json)]
    #[validate(nested)]
    pub additional_documentation: Vec<AdditionalDocument>,
}

/// DTO for a partial update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateDocumentation {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[validate(nested)]
    pub additional_documentation: Option<Vec<AdditionalDocument>>,
}

