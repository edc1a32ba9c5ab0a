//! Page location metadata captured at render time.

use serde::{Deserialize, Serialize};

/// URL components of a page at render time.
///
/// Invariants:
/// - `search` carries its leading `?` when present, empty string otherwise
/// - `hash` carries its leading `#` when present, empty string otherwise
/// - an empty `pathname` stands for the site root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLocation {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl PageLocation {
    /// Create a location from all three components.
    pub fn new(
        pathname: impl Into<String>,
        search: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
            hash: hash.into(),
        }
    }

    /// Create a location with only a pathname (no query string, no fragment).
    pub fn from_pathname(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: String::new(),
            hash: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let location = PageLocation::new("/pathname/", "?search", "#hash");
        assert_eq!(location.pathname, "/pathname/");
        assert_eq!(location.search, "?search");
        assert_eq!(location.hash, "#hash");
    }

    #[test]
    fn test_from_pathname() {
        let location = PageLocation::from_pathname("/posts/hello/");
        assert_eq!(location.pathname, "/posts/hello/");
        assert!(location.search.is_empty());
        assert!(location.hash.is_empty());
    }

    #[test]
    fn test_deserialize_missing_fields_default_empty() {
        // Hosts may hand over partial location objects
        let location: PageLocation = serde_json::from_str("{}").unwrap();
        assert_eq!(location, PageLocation::default());

        let location: PageLocation =
            serde_json::from_str(r#"{"pathname": "/pathname/"}"#).unwrap();
        assert_eq!(location.pathname, "/pathname/");
        assert!(location.search.is_empty());
    }
}
