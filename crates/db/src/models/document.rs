//! Document entity model and DTOs.

use cv_core::patch::double_option;
use cv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub document_id: DbId,
    pub keycloak_id: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub details: CreateDocument,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new document. Also embedded in [`Document`].
///
/// `url` may be null. When present it must be a valid URL, so `""` is
/// rejected.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDocument {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(url)]
    pub url: Option<String>,
}

/// DTO for a partial update. `url: null` clears the link.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateDocument {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(url)]
    #[serde(default, deserialize_with = "double_option")]
    pub url: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use cv_core::error::CoreError;
    use cv_core::validation::ValidatePayload;

    use super::*;

    fn create(url: Option<&str>) -> CreateDocument {
        CreateDocument {
            name: "Portfolio".to_string(),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn create_with_null_url_is_valid() {
        assert!(create(None).validate_payload().is_ok());
    }

    #[test]
    fn create_with_empty_url_is_invalid() {
        assert_matches!(
            create(Some("")).validate_payload(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn update_with_explicit_null_url_is_valid() {
        let input: UpdateDocument = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert!(input.validate_payload().is_ok());
    }

    #[test]
    fn update_with_empty_url_is_invalid() {
        let input: UpdateDocument = serde_json::from_str(r#"{"url": ""}"#).unwrap();
        assert!(input.validate_payload().is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<CreateDocument>(
            r#"{"name": "Portfolio", "url": null, "keycloakId": "someone-else"}"#,
        );
        assert!(result.is_err());
    }
}
