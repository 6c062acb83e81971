//! Authentication primitives.
//!
//! - [`jwt`] -- access-token validation (and minting, for tooling and tests).
//!
//! Tokens are issued by the external identity provider. This service only
//! verifies them and reads the subject id and role.

pub mod jwt;
