//! Well-known role name constants carried in the access token `role` claim.

/// The only role allowed to manage CV resources.
pub const ROLE_CANDIDATE: &str = "candidate";
