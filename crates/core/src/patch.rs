//! Helpers for partial-update payloads.
//!
//! Non-nullable columns use a plain `Option<T>` in patch DTOs: absent means
//! "leave untouched". Nullable columns need a third state, so they use
//! `Option<Option<T>>` together with [`double_option`]:
//!
//! | JSON            | Rust               | Effect            |
//! |-----------------|--------------------|-------------------|
//! | key absent      | `None`             | column untouched  |
//! | `"key": null`   | `Some(None)`       | column set NULL   |
//! | `"key": value`  | `Some(Some(v))`    | column set to `v` |

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable patch field.
///
/// Must be paired with `#[serde(default)]` so an absent key becomes `None`.
///
/// ```ignore
/// #[serde(default, deserialize_with = "cv_core::patch::double_option")]
/// pub url: Option<Option<String>>,
/// ```
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Whether the patch carries the field at all (value or explicit null).
pub fn is_present<T>(field: &Option<Option<T>>) -> bool {
    field.is_some()
}

/// The new value when one was supplied, `None` for absent or explicit null.
pub fn new_value<T>(field: &Option<Option<T>>) -> Option<&T> {
    field.as_ref().and_then(Option::as_ref)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        url: Option<Option<String>>,
    }

    fn parse(json: &str) -> Patch {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn absent_key_leaves_field_untouched() {
        let patch = parse("{}");
        assert!(!is_present(&patch.url));
        assert_eq!(new_value(&patch.url), None);
    }

    #[test]
    fn explicit_null_clears_field() {
        let patch = parse(r#"{"url": null}"#);
        assert!(is_present(&patch.url));
        assert_eq!(new_value(&patch.url), None);
    }

    #[test]
    fn value_sets_field() {
        let patch = parse(r#"{"url": "https://example.com/cv.pdf"}"#);
        assert!(is_present(&patch.url));
        assert_eq!(
            new_value(&patch.url).map(String::as_str),
            Some("https://example.com/cv.pdf")
        );
    }
}
