//! Exclusion rules: suppress canonical links for matching pathnames.
//!
//! Rules come in two shapes. A bare string is a literal rule, an inline
//! table compiles to a regex pattern:
//!
//! ```toml
//! exclude = ["/drafts", { pattern = "^/internal/" }]
//! ```

use regex::Regex;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single exclusion rule matched against the normalized pathname
/// (all trailing slashes stripped).
#[derive(Debug, Clone)]
pub enum ExcludeRule {
    /// Matches when the rule string contains the pathname as a substring.
    /// Containment runs rule-contains-pathname, not the reverse.
    Literal(String),
    /// Matches when the regex finds a match anywhere in the pathname
    /// (unanchored unless the pattern itself anchors).
    Pattern(Regex),
}

impl ExcludeRule {
    /// Create a literal rule.
    pub fn literal(rule: impl Into<String>) -> Self {
        Self::Literal(rule.into())
    }

    /// Create a pattern rule from a regex string.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Check whether this rule matches an already-normalized pathname.
    fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::Pattern(regex) => regex.is_match(normalized),
            Self::Literal(rule) => rule.contains(normalized),
        }
    }
}

/// True when any rule matches the pathname, first match wins.
///
/// The pathname is normalized by stripping every trailing `/` before
/// comparison, so `/drafts///` and `/drafts` hit the same rules.
pub fn is_excluded(rules: &[ExcludeRule], pathname: &str) -> bool {
    let normalized = pathname.trim_end_matches('/');
    rules.iter().any(|rule| rule.matches(normalized))
}

impl PartialEq for ExcludeRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

// ============================================================================
// serde
// ============================================================================

impl<'de> Deserialize<'de> for ExcludeRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuleVisitor;

        impl<'de> Visitor<'de> for RuleVisitor {
            type Value = ExcludeRule;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a literal pathname string or a `{ pattern = \"..\" }` table")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ExcludeRule::Literal(value.to_owned()))
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut pattern: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "pattern" => {
                            if pattern.is_some() {
                                return Err(de::Error::duplicate_field("pattern"));
                            }
                            pattern = Some(map.next_value()?);
                        }
                        other => return Err(de::Error::unknown_field(other, &["pattern"])),
                    }
                }
                let pattern = pattern.ok_or_else(|| de::Error::missing_field("pattern"))?;
                let regex = Regex::new(&pattern).map_err(de::Error::custom)?;
                Ok(ExcludeRule::Pattern(regex))
            }
        }

        deserializer.deserialize_any(RuleVisitor)
    }
}

impl Serialize for ExcludeRule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Literal(rule) => serializer.serialize_str(rule),
            Self::Pattern(regex) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("pattern", regex.as_str())?;
                map.end()
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rules_never_excludes() {
        assert!(!is_excluded(&[], "/my-pathname/"));
        assert!(!is_excluded(&[], ""));
    }

    #[test]
    fn test_literal_match() {
        let rules = [ExcludeRule::literal("/my-pathname")];
        assert!(is_excluded(&rules, "/my-pathname/"));
        assert!(is_excluded(&rules, "/my-pathname"));
        assert!(!is_excluded(&rules, "/other"));
    }

    #[test]
    fn test_literal_among_several() {
        let rules = [
            ExcludeRule::literal("/something"),
            ExcludeRule::literal("/my-pathname"),
        ];
        assert!(is_excluded(&rules, "/my-pathname/"));
    }

    #[test]
    fn test_pattern_match_is_partial() {
        // Unanchored pattern hits anywhere in the pathname
        let rules = [ExcludeRule::pattern("pathname").unwrap()];
        assert!(is_excluded(&rules, "/my-pathname/"));
        assert!(!is_excluded(&rules, "/about/"));
    }

    #[test]
    fn test_pattern_anchoring_respected() {
        let rules = [ExcludeRule::pattern("^not").unwrap()];
        assert!(!is_excluded(&rules, "/my-pathname/"));

        let rules = [
            ExcludeRule::pattern("^not").unwrap(),
            ExcludeRule::pattern("pathname").unwrap(),
        ];
        assert!(is_excluded(&rules, "/my-pathname/"));
    }

    #[test]
    fn test_repeated_trailing_slashes_stripped() {
        let rules = [ExcludeRule::literal("/my-pathname")];
        assert!(is_excluded(&rules, "/my-pathname///"));
    }

    #[test]
    fn test_literal_rule_contains_pathname_not_reverse() {
        // Documented quirk: literal rules match by containment of the
        // pathname in the rule, not the other way around. A rule longer
        // than the pathname still matches when it contains it.
        let rules = [ExcludeRule::literal("/my-pathname/nested")];
        assert!(is_excluded(&rules, "/my-pathname"));

        // The reverse direction does not hold
        let rules = [ExcludeRule::literal("/my")];
        assert!(!is_excluded(&rules, "/my-pathname"));
    }

    #[test]
    fn test_root_path_matches_any_literal() {
        // Follows from the containment direction: "/" normalizes to the
        // empty string, which every literal rule contains.
        let rules = [ExcludeRule::literal("/whatever")];
        assert!(is_excluded(&rules, "/"));
    }

    #[test]
    fn test_equality_by_shape_and_source() {
        assert_eq!(ExcludeRule::literal("/a"), ExcludeRule::literal("/a"));
        assert_ne!(ExcludeRule::literal("/a"), ExcludeRule::literal("/b"));
        assert_eq!(
            ExcludeRule::pattern("^/a").unwrap(),
            ExcludeRule::pattern("^/a").unwrap()
        );
        assert_ne!(
            ExcludeRule::literal("/a"),
            ExcludeRule::pattern("/a").unwrap()
        );
    }

    #[test]
    fn test_serialize_roundtrip() {
        let rules = vec![
            ExcludeRule::literal("/drafts"),
            ExcludeRule::pattern("^/internal/").unwrap(),
        ];
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(json, r#"["/drafts",{"pattern":"^/internal/"}]"#);

        let parsed: Vec<ExcludeRule> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_deserialize_rejects_invalid_regex() {
        let result: Result<ExcludeRule, _> = serde_json::from_str(r#"{"pattern":"["}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_table_key() {
        let result: Result<ExcludeRule, _> = serde_json::from_str(r#"{"regex":"x"}"#);
        assert!(result.is_err());
    }
}
