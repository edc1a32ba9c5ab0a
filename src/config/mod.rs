//! Plugin configuration for canonical link emission.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── exclude    # ExcludeRule (literal | pattern) and matching
//! ├── field      # FieldPath
//! └── mod.rs     # CanonicalConfig (this file)
//! ```
//!
//! # Options
//!
//! | Option                 | Purpose                                        |
//! |------------------------|------------------------------------------------|
//! | `site_url`             | Absolute site origin; required to emit links   |
//! | `force_trailing_slash` | Append `/` to pathnames that lack one          |
//! | `no_trailing_slash`    | Strip one `/` from pathnames that end with one |
//! | `no_query_string`      | Drop the query string from canonical URLs      |
//! | `no_hash`              | Drop the fragment from canonical URLs          |
//! | `exclude`              | Pathname rules that suppress the link          |

mod error;
pub mod exclude;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use exclude::ExcludeRule;
pub use field::FieldPath;

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// root configuration
// ============================================================================

/// Canonical link options, supplied once per build.
///
/// All fields default to "off"; without `site_url` the hook emits nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalConfig {
    /// Absolute site origin prepended to every pathname
    /// (e.g., "https://example.com"). Empty counts as unset.
    pub site_url: Option<String>,

    /// Append a trailing slash to pathnames that lack one.
    pub force_trailing_slash: bool,

    /// Strip the trailing slash from pathnames that have one.
    /// Mutually exclusive with `force_trailing_slash`.
    pub no_trailing_slash: bool,

    /// Drop the query string from the canonical URL.
    pub no_query_string: bool,

    /// Drop the fragment from the canonical URL.
    pub no_hash: bool,

    /// Pathnames to skip: literal strings or `{ pattern = ".." }` tables.
    pub exclude: Vec<ExcludeRule>,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            site_url: None,
            force_trailing_slash: false,
            no_trailing_slash: false,
            no_query_string: false,
            no_hash: false,
            exclude: Vec::new(),
        }
    }
}

/// Field paths for [`CanonicalConfig`] diagnostics.
pub struct CanonicalConfigFields {
    pub site_url: FieldPath,
    pub force_trailing_slash: FieldPath,
    pub no_trailing_slash: FieldPath,
    pub exclude: FieldPath,
}

impl CanonicalConfig {
    /// Compile-time checked field paths for diagnostics.
    pub const FIELDS: CanonicalConfigFields = CanonicalConfigFields {
        site_url: FieldPath::new("canonical.site_url"),
        force_trailing_slash: FieldPath::new("canonical.force_trailing_slash"),
        no_trailing_slash: FieldPath::new("canonical.no_trailing_slash"),
        exclude: FieldPath::new("canonical.exclude"),
    };

    /// Parse configuration from a TOML string.
    ///
    /// Unknown fields are logged as a warning and ignored; the host decides
    /// whether that is fatal.
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        if !ignored.is_empty() {
            log!("warning"; "unknown canonical config fields:");
            log!("warning"; "ignoring:");
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Validate configuration, collecting all problems at once.
    ///
    /// # Checks
    /// - `force_trailing_slash` and `no_trailing_slash` must not both be set
    /// - `site_url`, when present, must be an http(s) URL with a host
    ///
    /// A missing `site_url` is not an error: resolution silently yields no
    /// link. A hint is printed so the silence is explainable.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if self.force_trailing_slash && self.no_trailing_slash {
            diag.error_with_hint(
                Self::FIELDS.no_trailing_slash,
                format!(
                    "conflicts with {}",
                    Self::FIELDS.force_trailing_slash.as_str()
                ),
                "enable at most one of the trailing-slash options",
            );
        }

        match self.site_url.as_deref() {
            Some(url_str) if !url_str.is_empty() => self.validate_site_url(url_str, &mut diag),
            _ => diag.hint(
                Self::FIELDS.site_url,
                "not set, canonical links are disabled",
            ),
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// URL format check using url crate for strict validation.
    ///
    /// Load-time only: the resolver itself never parses URLs.
    fn validate_site_url(&self, url_str: &str, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.site_url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.site_url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.site_url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> CanonicalConfig {
    let (parsed, ignored) = CanonicalConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
