//! Domain building blocks shared by the CV service crates.
//!
//! Nothing in this crate performs I/O. The database crate and the HTTP
//! crate both depend on it for error types, ownership checks and payload
//! validation rules.

pub mod additional_document;
pub mod error;
pub mod ownership;
pub mod patch;
pub mod roles;
pub mod types;
pub mod validation;
