//! Head link descriptors and the injector seam.
//!
//! Pure data only: merging descriptors into the rendered `<head>` is the
//! host injector's job, including precedence when a page registered its own
//! canonical link.

use serde::Serialize;

/// Declarative `<link>` descriptor handed to the head-tag injector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTag {
    pub rel: String,
    /// Deduplication key for the injector's merge step.
    pub key: String,
    pub href: String,
}

impl LinkTag {
    /// Canonical link descriptor. `key` mirrors `href` so repeated
    /// registrations of the same URL collapse in the injector.
    pub fn canonical(url: impl Into<String>) -> Self {
        let href = url.into();
        Self {
            rel: "canonical".into(),
            key: href.clone(),
            href,
        }
    }
}

/// Sink for head tag registrations.
///
/// Implementors own merge and precedence semantics; the hook only registers.
pub trait HeadTags {
    fn push_link(&mut self, link: LinkTag);
}

/// Plain collecting sink, useful for hosts that render tags in one pass.
impl HeadTags for Vec<LinkTag> {
    fn push_link(&mut self, link: LinkTag) {
        self.push(link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_constructor() {
        let link = LinkTag::canonical("http://my-site.com/pathname/");
        assert_eq!(link.rel, "canonical");
        assert_eq!(link.key, "http://my-site.com/pathname/");
        assert_eq!(link.href, "http://my-site.com/pathname/");
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut head: Vec<LinkTag> = Vec::new();
        head.push_link(LinkTag::canonical("http://a.test/"));
        head.push_link(LinkTag::canonical("http://b.test/"));
        assert_eq!(head.len(), 2);
        assert_eq!(head[0].href, "http://a.test/");
        assert_eq!(head[1].href, "http://b.test/");
    }

    #[test]
    fn test_serialize_for_host_boundary() {
        let link = LinkTag::canonical("http://my-site.com/");
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(
            json,
            r#"{"rel":"canonical","key":"http://my-site.com/","href":"http://my-site.com/"}"#
        );
    }
}
