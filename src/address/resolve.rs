//! Origin/pathname resolution for a URL without query or hash.
//!
//! # Branches
//!
//! | Input                  | Origin              | Pathname                         |
//! |------------------------|---------------------|----------------------------------|
//! | `//cdn.example.com/x`  | `None`              | input, literally                 |
//! | `https://host/a/../b`  | `https://host`      | `/b` (parser-resolved)           |
//! | `/a`, `./a`, `` (empty) | `None`             | resolved against the base URL    |
//!
//! The base URL for relative input is the document base when one is injected
//! (a page rendered in a browser-like context), otherwise a placeholder origin
//! followed by the base server path.

use std::sync::LazyLock;

use serde::Serialize;
use url::Url;

use crate::utils::scheme::authority_len;

/// Placeholder origin for resolving relative input outside a document context.
const FAKE_ORIGIN: &str = "http://fake.example.org";

static FAKE_ORIGIN_URL: LazyLock<Option<Url>> = LazyLock::new(|| Url::parse(FAKE_ORIGIN).ok());

/// Result of origin/pathname resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// Exact prefix of the input covering scheme + authority.
    pub origin: Option<String>,
    /// Root-relative, undecoded path without query or hash.
    pub pathname: String,
}

/// Resolve the origin and pathname of `url` (which must not contain `?` or `#`).
///
/// # Panics
///
/// Panics if the resolved pathname breaks its contract (no leading `/`, or a
/// `?`/`#` inside). That indicates a resolver defect, not bad input.
///
/// # Examples
/// ```
/// use urlmount::resolve_origin;
/// let resolved = resolve_origin("https://example.com/a/../b", "/", None);
/// assert_eq!(resolved.origin.as_deref(), Some("https://example.com"));
/// assert_eq!(resolved.pathname, "/b");
///
/// let resolved = resolve_origin("./page", "/app/", None);
/// assert_eq!(resolved.origin, None);
/// assert_eq!(resolved.pathname, "/app/page");
/// ```
pub fn resolve_origin(url: &str, base_server: &str, document_base: Option<&Url>) -> Resolved {
    // `Url::join` would read `//host` as an authority
    let resolved = if url.starts_with("//") {
        Resolved {
            origin: None,
            pathname: url.to_string(),
        }
    } else if let Some(resolved) = resolve_absolute(url) {
        resolved
    } else {
        resolve_relative(url, base_server, document_base)
    };

    assert!(
        resolved.pathname.starts_with('/'),
        "resolved pathname must start with `/`: url={url:?} resolved={resolved:?}"
    );
    assert!(
        !resolved.pathname.contains(['?', '#']),
        "resolved pathname must not contain query or hash: url={url:?} resolved={resolved:?}"
    );
    if let Some(origin) = &resolved.origin {
        assert!(
            url.starts_with(origin.as_str()),
            "origin must be a prefix of the url: url={url:?} origin={origin:?}"
        );
    }

    resolved
}

/// Input with its own scheme and host.
fn resolve_absolute(url: &str) -> Option<Resolved> {
    let parsed = Url::parse(url).ok()?;
    if !parsed.has_host() {
        return None;
    }

    let serialized = parsed.origin().ascii_serialization();
    let origin = if parsed.origin().is_tuple() && url.starts_with(&serialized) {
        serialized
    } else {
        // Uppercase host, userinfo, opaque origin: keep the literal span
        url[..authority_len(url)?].to_string()
    };

    Some(Resolved {
        origin: Some(origin),
        pathname: with_leading_slash(parsed.path()),
    })
}

/// Input without origin: resolved against the document base or the placeholder.
fn resolve_relative(url: &str, base_server: &str, document_base: Option<&Url>) -> Resolved {
    let fallback;
    let base = match document_base {
        Some(base) => Some(base),
        None => {
            fallback = placeholder_base(base_server);
            fallback.as_ref()
        }
    };

    let pathname = match base.and_then(|base| base.join(url).ok()) {
        Some(joined) => with_leading_slash(joined.path()),
        // e.g. `http://[bad` - neither absolute nor joinable
        None => with_leading_slash(url),
    };

    Resolved {
        origin: None,
        pathname,
    }
}

fn placeholder_base(base_server: &str) -> Option<Url> {
    Url::parse(&format!("{FAKE_ORIGIN}{base_server}"))
        .ok()
        .or_else(|| FAKE_ORIGIN_URL.clone())
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
