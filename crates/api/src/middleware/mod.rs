//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated caller from a JWT Bearer token.
//! - [`rbac::RequireCandidate`] -- Requires the `candidate` role.

pub mod auth;
pub mod rbac;
