//! Base-path matching against resolved pathnames.

use serde::Serialize;

use super::normalize_base_server;

/// Pathname with the base path removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrippedPath {
    /// Root-relative pathname (base removed when matched).
    pub pathname: String,
    /// Whether the base path was present.
    pub has_base_server: bool,
}

impl StrippedPath {
    fn matched(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            has_base_server: true,
        }
    }

    fn unmatched(pathname: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            has_base_server: false,
        }
    }
}

/// Strip `base_server` from a resolved (undecoded) pathname.
///
/// Matching is a literal prefix test against the base as configured, with one
/// extra rule: a base written with a trailing slash also matches the pathname
/// that equals the base without it (`/app` under `/app/`). The reverse case
/// needs no rule since `/app/` already starts with `/app`.
///
/// Repeated trailing slashes in the base collapse to one before matching, so a
/// path mounted by [`prepend_base`](crate::prepend_base) always strips back.
///
/// # Panics
///
/// Panics if `pathname` does not start with `/` or contains `?` or `#`, or if
/// `base_server` does not start with `/`.
///
/// # Examples
/// ```
/// use urlmount::strip_base_server;
/// let stripped = strip_base_server("/app/about", "/app/");
/// assert_eq!(stripped.pathname, "/about");
/// assert!(stripped.has_base_server);
///
/// let stripped = strip_base_server("/other", "/app/");
/// assert_eq!(stripped.pathname, "/other");
/// assert!(!stripped.has_base_server);
/// ```
pub fn strip_base_server(pathname: &str, base_server: &str) -> StrippedPath {
    assert!(
        pathname.starts_with('/') && !pathname.contains(['?', '#']),
        "resolved pathname must be root-relative without query or hash: pathname={pathname:?}"
    );
    assert!(
        base_server.starts_with('/'),
        "base server must start with `/`: base_server={base_server:?}"
    );

    let normalized = normalize_base_server(base_server);
    if normalized == "/" {
        return StrippedPath::matched(pathname);
    }

    let prefix = match base_server.strip_suffix('/') {
        Some(without_slash) if pathname == without_slash => without_slash,
        Some(_) => &base_server[..normalized.len() + 1],
        None => base_server,
    };

    match pathname.strip_prefix(prefix) {
        Some(rest) if rest.starts_with('/') => StrippedPath::matched(rest),
        Some(rest) => StrippedPath::matched(format!("/{rest}")),
        None => StrippedPath::unmatched(pathname),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prepend_base;

    #[test]
    fn test_root_base_always_matches() {
        let stripped = strip_base_server("/about", "/");
        assert_eq!(stripped, StrippedPath::matched("/about"));

        let stripped = strip_base_server("/", "/");
        assert_eq!(stripped, StrippedPath::matched("/"));
    }

    #[test]
    fn test_strip_with_trailing_slash_base() {
        assert_eq!(
            strip_base_server("/app/about", "/app/"),
            StrippedPath::matched("/about")
        );
        assert_eq!(
            strip_base_server("/app/", "/app/"),
            StrippedPath::matched("/")
        );
    }

    #[test]
    fn test_strip_without_trailing_slash_base() {
        assert_eq!(
            strip_base_server("/app/about", "/app"),
            StrippedPath::matched("/about")
        );
        assert_eq!(strip_base_server("/app", "/app"), StrippedPath::matched("/"));
        assert_eq!(strip_base_server("/app/", "/app"), StrippedPath::matched("/"));
    }

    #[test]
    fn test_trailing_slash_equivalence() {
        // `/app` under `/app/` matches and strips to the root
        assert_eq!(strip_base_server("/app", "/app/"), StrippedPath::matched("/"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(
            strip_base_server("/other/page", "/app/"),
            StrippedPath::unmatched("/other/page")
        );
        assert_eq!(strip_base_server("/", "/app/"), StrippedPath::unmatched("/"));
        assert_eq!(strip_base_server("/ap", "/app"), StrippedPath::unmatched("/ap"));
    }

    #[test]
    fn test_segment_boundary_depends_on_trailing_slash() {
        // With a trailing slash the base is a whole segment
        assert_eq!(
            strip_base_server("/apple", "/app/"),
            StrippedPath::unmatched("/apple")
        );
        // Without it the match is a plain string prefix
        assert_eq!(
            strip_base_server("/apple", "/app"),
            StrippedPath::matched("/le")
        );
    }

    #[test]
    fn test_repeated_trailing_slash_base() {
        assert_eq!(
            strip_base_server("/app/x", "/app//"),
            StrippedPath::matched("/x")
        );
        assert_eq!(strip_base_server("/app/", "/app//"), StrippedPath::matched("/"));
        // Equivalence only drops a single trailing slash
        assert_eq!(
            strip_base_server("/app", "/app//"),
            StrippedPath::unmatched("/app")
        );
    }

    #[test]
    fn test_strip_unmatched_twice_is_noop() {
        let once = strip_base_server("/other", "/app/");
        assert!(!once.has_base_server);
        let twice = strip_base_server(&once.pathname, "/app/");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_prepend_then_strip_roundtrip() {
        for base in ["/app", "/app/", "/app//", "/a/b/", "/a/b", "//"] {
            for path in ["/", "/about", "/posts/hello/", "/app"] {
                let mounted = prepend_base(path, base);
                assert_eq!(
                    strip_base_server(&mounted, base),
                    StrippedPath::matched(path),
                    "base={base:?} path={path:?}"
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "root-relative")]
    fn test_pathname_without_leading_slash_panics() {
        strip_base_server("about", "/");
    }

    #[test]
    #[should_panic(expected = "base server must start with")]
    fn test_base_without_leading_slash_panics() {
        strip_base_server("/about", "app/");
    }
}
