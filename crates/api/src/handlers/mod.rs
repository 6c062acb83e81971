//! HTTP handlers.
//!
//! - [`cv`] -- the CV aggregate of one candidate.
//! - [`resource`] -- generic handlers shared by every CV child resource.

pub mod cv;
pub mod resource;
