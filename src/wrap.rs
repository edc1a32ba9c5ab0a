//! Page-wrapping hook.
//!
//! Invoked by the host generator once per rendered page: registers the
//! page's canonical link with the head-tag injector and passes the rendered
//! element through unchanged.

use crate::config::{CanonicalConfig, ConfigError};
use crate::debug;
use crate::page::{HeadTags, LinkTag, PageLocation};
use crate::resolve::resolve;

/// Wrap a rendered page element.
///
/// Resolves the canonical URL for `location` and registers a
/// `rel="canonical"` descriptor with `head` when one is produced. The
/// element is returned unchanged in every case.
///
/// The tag is registered even when the wrapped element declared its own
/// canonical link; precedence between the two is the injector's call.
///
/// # Errors
///
/// Propagates [`ConfigError::ConflictingTrailingSlash`], which should abort
/// rendering of the page.
pub fn wrap_page<E>(
    element: E,
    location: &PageLocation,
    config: &CanonicalConfig,
    head: &mut dyn HeadTags,
) -> Result<E, ConfigError> {
    match resolve(location, config)? {
        Some(url) => {
            debug!("canonical"; "{} -> {url}", location.pathname);
            head.push_link(LinkTag::canonical(url));
        }
        None => {
            debug!("canonical"; "skipped {}", location.pathname);
        }
    }

    Ok(element)
}

// ============================================================================
// tests
// ============================================================================
