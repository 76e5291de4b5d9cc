//! urlmount - URL decomposition and base-path mounting.
//!
//! Splits a URL into origin, pathname, query and hash so that the pieces
//! always rebuild the exact input, and decides whether the pathname lies under
//! the configured server base path (stripping it when it does). The inverse,
//! [`prepend_base`], mounts root-relative links under a base path or an asset
//! origin.
//!
//! ```
//! use urlmount::{parse_url, prepend_base};
//!
//! let parsed = parse_url("/app/posts/hello%20world?page=2#top", "/app/");
//! assert_eq!(parsed.pathname, "/posts/hello world");
//! assert!(parsed.has_base_server);
//! assert_eq!(parsed.search_value("page"), Some("2"));
//! assert_eq!(parsed.to_original(), "/app/posts/hello%20world?page=2#top");
//!
//! assert_eq!(prepend_base("/posts/", "/app/"), "/app/posts/");
//! ```
//!
//! Everything outside [`config`] and [`logger`] is pure and synchronous.

pub mod address;
pub mod base;
pub mod config;
pub mod core;
pub mod logger;
pub mod utils;

pub use address::{Resolved, SearchParams, UrlParser, parse_url, resolve_origin};
pub use base::{
    Base, BaseAssets, BaseServer, StrippedPath, UsageError, is_base_assets,
    normalize_base_assets, normalize_base_server, prepend_base, strip_base_server,
    validate_base_assets, validate_base_server,
};
pub use crate::core::{ParsedUrl, UrlKind, is_parsable};
pub use utils::decode::{decode_pathname, decode_safe};
