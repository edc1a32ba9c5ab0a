//! Build-time canonical `<link>` hook for static site generators.
//!
//! Given a rendered page element and its location metadata, the hook
//! computes the page's canonical absolute URL from the plugin configuration,
//! registers a `<link rel="canonical">` descriptor with the host's head-tag
//! injector, and passes the element through unchanged. Pages without a
//! configured `site_url` and pages matching an exclusion rule get no link.
//!
//! # Module Structure
//!
//! | Module    | Purpose                                              |
//! |-----------|------------------------------------------------------|
//! | `config`  | Options, TOML loading, validation diagnostics        |
//! | `page`    | Location metadata, link descriptors, injector seam   |
//! | `resolve` | Canonical URL resolution (the decision + the string) |
//! | `wrap`    | The per-page hook invoked by the host                |
//! | `logger`  | Colored `log!` / `debug!` macros                     |
//!
//! # Example
//!
//! ```
//! use canonical_link::{CanonicalConfig, LinkTag, PageLocation, wrap_page};
//!
//! let config = CanonicalConfig {
//!     site_url: Some("https://example.com".into()),
//!     ..CanonicalConfig::default()
//! };
//! let location = PageLocation::new("/posts/hello/", "?ref=feed", "#top");
//!
//! let mut head: Vec<LinkTag> = Vec::new();
//! let page = wrap_page("<html>", &location, &config, &mut head).unwrap();
//!
//! assert_eq!(page, "<html>");
//! assert_eq!(head[0].href, "https://example.com/posts/hello/?ref=feed#top");
//! ```

pub mod config;
pub mod logger;
pub mod page;
pub mod resolve;
pub mod wrap;

pub use config::{CanonicalConfig, ConfigDiagnostics, ConfigError, ExcludeRule};
pub use page::{HeadTags, LinkTag, PageLocation};
pub use resolve::resolve;
pub use wrap::wrap_page;
