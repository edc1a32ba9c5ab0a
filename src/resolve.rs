//! Canonical URL resolution.
//!
//! Decides whether a page gets a canonical link and builds the absolute URL.
//! Pure string work: no percent-encoding, no URL parsing, no host checks.

use crate::config::exclude::is_excluded;
use crate::config::{CanonicalConfig, ConfigError};
use crate::page::PageLocation;

/// Resolve the canonical URL for a page, if any.
///
/// Fails fast with [`ConfigError::ConflictingTrailingSlash`] when both
/// trailing-slash options are set, before any URL work. Returns `None` when
/// no `site_url` is configured or the pathname matches an exclusion rule.
///
/// Identical inputs always produce identical output; the function holds no
/// state and is safe to call from a parallel build.
pub fn resolve(
    location: &PageLocation,
    config: &CanonicalConfig,
) -> Result<Option<String>, ConfigError> {
    if config.no_trailing_slash && config.force_trailing_slash {
        return Err(ConfigError::ConflictingTrailingSlash);
    }

    let Some(site_url) = config.site_url.as_deref().filter(|url| !url.is_empty()) else {
        return Ok(None);
    };

    if is_excluded(&config.exclude, &location.pathname) {
        return Ok(None);
    }

    Ok(Some(build_url(site_url, location, config)))
}

/// Concatenate `site_url` + pathname (+ search) (+ hash).
fn build_url(site_url: &str, location: &PageLocation, config: &CanonicalConfig) -> String {
    let pathname = if location.pathname.is_empty() {
        "/"
    } else {
        location.pathname.as_str()
    };

    let mut url = String::with_capacity(
        site_url.len() + pathname.len() + location.search.len() + location.hash.len() + 1,
    );
    url.push_str(site_url);

    // Exactly one slash is stripped here, unlike exclusion matching which
    // strips them all.
    if config.no_trailing_slash
        && !config.force_trailing_slash
        && let Some(stripped) = pathname.strip_suffix('/')
    {
        url.push_str(stripped);
    } else {
        url.push_str(pathname);
        if config.force_trailing_slash && !pathname.ends_with('/') {
            url.push('/');
        }
    }

    if !config.no_query_string {
        url.push_str(&location.search);
    }
    if !config.no_hash {
        url.push_str(&location.hash);
    }

    url
}

// ============================================================================
// tests
// ============================================================================
