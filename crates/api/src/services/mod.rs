//! Service layer between handlers and repositories.
//!
//! Services translate "no row" outcomes from the repositories into
//! [`CoreError::NotFound`](cv_core::error::CoreError::NotFound) and make sure
//! the parent CV exists before a child resource is written.

pub mod cv;
pub mod resource;
