//! Education entity model and DTOs.

use cv_core::additional_document::AdditionalDocument;
use cv_core::patch::double_option;
use cv_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `educations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub education_id: DbId,
    pub keycloak_id: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub details: CreateEducation,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new education. Also embedded in [`Education`].
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEducation {
    #[validate(length(min = 1, max = 255))]
    pub center_type: String,
    #[validate(length(min = 1, max = 255))]
    pub country: String,
    #[validate(length(min = 1, max = 255))]
    pub center_name: String,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub category: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[serde(default)]
    #[sqlx(json)]
    #[validate(nested)]
    pub additional_documents: Vec<AdditionalDocument>,
}

/// DTO for a partial update. Absent fields are left untouched; nullable
/// fields accept an explicit `null` to clear them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEducation {
    #[validate(length(min = 1, max = 255))]
    pub center_type: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub country: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub center_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
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

#[cfg(test)]
mod tests {
    use cv_core::validation::ValidatePayload;

    use super::*;

    fn new_education() -> CreateEducation {
        CreateEducation {
            center_type: "College".to_string(),
            country: "ES".to_string(),
            center_name: "X University".to_string(),
            title: "BSc".to_string(),
            category: "Tech".to_string(),
            start_date: Date::from_ymd_opt(2019, 1, 1).unwrap(),
            end_date: None,
            description: None,
            additional_documents: Vec::new(),
        }
    }

    #[test]
    fn camel_case_payload_deserializes() {
        let input: CreateEducation = serde_json::from_value(serde_json::json!({
            "centerType": "College",
            "country": "ES",
            "centerName": "X University",
            "title": "BSc",
            "category": "Tech",
            "startDate": "2019-01-01",
        }))
        .unwrap();
        assert_eq!(input, new_education());
        assert!(input.validate_payload().is_ok());
    }

    #[test]
    fn create_rejects_invalid_nested_document() {
        let input = CreateEducation {
            additional_documents: vec![AdditionalDocument {
                name: "Diploma".into(),
                url: Some(String::new()),
            }],
            ..new_education()
        };
        assert!(input.validate_payload().is_err());
    }

    #[test]
    fn update_validates_nested_documents_like_create() {
        let input = UpdateEducation {
            additional_documents: Some(vec![AdditionalDocument {
                name: String::new(),
                url: None,
            }]),
            ..Default::default()
        };
        assert!(input.validate_payload().is_err());
    }

    #[test]
    fn update_rejects_empty_required_field() {
        let input = UpdateEducation {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(input.validate_payload().is_err());
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(UpdateEducation::default().validate_payload().is_ok());
    }

    #[test]
    fn update_description_rules_apply_only_to_a_value() {
        let cleared: UpdateEducation = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert!(cleared.validate_payload().is_ok());

        let too_long = UpdateEducation {
            description: Some(Some("x".repeat(2001))),
            ..Default::default()
        };
        assert!(too_long.validate_payload().is_err());
    }
}
