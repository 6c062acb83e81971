//! Payload validation shared by every CV resource.
//!
//! Create and patch DTOs both derive [`validator::Validate`] with the same
//! field rules. On a patch the rules apply only to the fields it carries:
//! an absent field or an explicit `null` is never checked. The HTTP layer
//! only sees [`ValidatePayload`], which reports failures as
//! [`CoreError::Validation`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// A request payload that can be checked before it reaches a repository.
pub trait ValidatePayload {
    fn validate_payload(&self) -> Result<(), CoreError>;
}

impl<T: Validate> ValidatePayload for T {
    fn validate_payload(&self) -> Result<(), CoreError> {
        self.validate().map_err(CoreError::from)
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::additional_document::AdditionalDocument;

    #[derive(Validate)]
    struct Patch {
        #[validate(length(min = 1, max = 5))]
        title: Option<String>,
        #[validate(url)]
        url: Option<Option<String>>,
        #[validate(nested)]
        documents: Option<Vec<AdditionalDocument>>,
    }

    fn empty_patch() -> Patch {
        Patch {
            title: None,
            url: None,
            documents: None,
        }
    }

    #[test]
    fn absent_and_null_fields_are_not_checked() {
        assert!(empty_patch().validate_payload().is_ok());
        let patch = Patch {
            url: Some(None),
            ..empty_patch()
        };
        assert!(patch.validate_payload().is_ok());
    }

    #[test]
    fn present_fields_use_the_declared_rules() {
        let patch = Patch {
            title: Some(String::new()),
            ..empty_patch()
        };
        assert_matches!(
            patch.validate_payload(),
            Err(CoreError::Validation(msg)) if msg.contains("title")
        );

        let patch = Patch {
            url: Some(Some(String::new())),
            ..empty_patch()
        };
        assert!(patch.validate_payload().is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let patch = Patch {
            title: Some("ñ".repeat(5)),
            ..empty_patch()
        };
        assert!(patch.validate_payload().is_ok());
    }

    #[test]
    fn nested_documents_are_checked() {
        let patch = Patch {
            documents: Some(vec![
                AdditionalDocument {
                    name: "Diploma".into(),
                    url: None,
                },
                AdditionalDocument {
                    name: String::new(),
                    url: None,
                },
            ]),
            ..empty_patch()
        };
        assert_matches!(
            patch.validate_payload(),
            Err(CoreError::Validation(msg)) if msg.contains("documents")
        );
    }
}
