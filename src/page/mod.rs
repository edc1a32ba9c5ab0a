//! Page-facing value types.
//!
//! - `location`: URL components of a page at render time
//! - `link`: head link descriptors and the `HeadTags` injector seam

mod link;
mod location;

pub use link::{HeadTags, LinkTag};
pub use location::PageLocation;
