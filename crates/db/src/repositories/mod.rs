//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Child-resource repositories
//! implement [`OwnedResourceRepo`], and every one of their queries filters
//! on the owner id the caller passes in.

pub mod cv_repo;
pub mod document_repo;
pub mod documentation_repo;
pub mod education_repo;
pub mod experience_repo;
pub mod language_repo;
pub mod owned;

pub use cv_repo::CvRepo;
pub use document_repo::DocumentRepo;
pub use documentation_repo::DocumentationRepo;
pub use education_repo::EducationRepo;
pub use experience_repo::ExperienceRepo;
pub use language_repo::LanguageRepo;
pub use owned::OwnedResourceRepo;
