//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Field paths are defined once as consts (see [`CanonicalConfig::FIELDS`])
/// so diagnostics never carry hand-typed, drifting field names.
///
/// # Example
///
/// ```ignore
/// diag.error(CanonicalConfig::FIELDS.site_url, "required");
/// ```
///
/// [`CanonicalConfig::FIELDS`]: crate::config::CanonicalConfig::FIELDS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
