//! Core types - pure value objects shared across the crate.

mod link;
mod url;

pub use self::link::{UrlKind, is_parsable};
pub use self::url::ParsedUrl;
