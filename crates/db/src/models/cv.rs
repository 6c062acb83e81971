//! CV aggregate root model.

use serde::Serialize;
use sqlx::FromRow;
use cv_core::types::{DbId, Timestamp};

use crate::models::document::Document;
use crate::models::documentation::Documentation;
use crate::models::education::Education;
use crate::models::experience::Experience;
use crate::models::language::Language;

/// A row from the `cvs` table. Exactly one per owner.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    pub cv_id: DbId,
    pub keycloak_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A CV together with every child resource of its owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvWithResources {
    #[serde(flatten)]
    pub cv: Cv,
    pub educations: Vec<Education>,
    pub experiences: Vec<Experience>,
    pub languages: Vec<Language>,
    pub documents: Vec<Document>,
    pub documentation: Vec<Documentation>,
}
