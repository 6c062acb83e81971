//! The additional-document value object.
//!
//! Educations, experiences and languages carry a list of supporting
//! documents (certificates, diplomas, reference letters); documentation
//! entries carry the same shape under a different name. The list is stored
//! inline as JSONB on the owning row, never in a table of its own.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named link to a supporting document. `url` may be null; when present
/// it must be a valid URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AdditionalDocument {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(url)]
    pub url: Option<String>,
}
