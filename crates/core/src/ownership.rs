//! Ownership checks for owner-scoped resources.
//!
//! A caller who does not own a resource must get exactly the response a
//! caller asking for a nonexistent resource gets. The guard therefore never
//! produces [`CoreError::Forbidden`]; on mismatch it returns whatever
//! not-found error the caller hands it.
//!
//! Handlers run the guard against the owner id taken from the request path,
//! before any storage access.

use crate::error::CoreError;

/// Returns `true` when `caller_id` is the declared owner.
pub fn is_owner(caller_id: &str, resource_owner_id: &str) -> bool {
    caller_id == resource_owner_id
}

/// Returns `Ok(())` when `caller_id` owns the resource, `Err(error)` otherwise.
pub fn is_owner_or_fail(
    caller_id: &str,
    resource_owner_id: &str,
    error: CoreError,
) -> Result<(), CoreError> {
    if is_owner(caller_id, resource_owner_id) {
        Ok(())
    } else {
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn same_identity_is_owner() {
        assert!(is_owner("u1", "u1"));
    }

    #[test]
    fn different_identity_is_not_owner() {
        assert!(!is_owner("u1", "u2"));
        assert!(!is_owner("u1", "U1"));
        assert!(!is_owner("", "u1"));
    }

    #[test]
    fn owner_or_fail_passes_for_owner() {
        let result = is_owner_or_fail("u1", "u1", CoreError::not_found("Education", "x"));
        assert!(result.is_ok());
    }

    #[test]
    fn owner_or_fail_returns_supplied_error() {
        let result = is_owner_or_fail("u2", "u1", CoreError::not_found("Education", "abc"));
        assert_matches!(
            result,
            Err(CoreError::NotFound { entity: "Education", ref id }) if id == "abc"
        );
    }
}
