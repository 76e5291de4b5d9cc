//! URL decomposition.
//!
//! # Pipeline
//!
//! ```text
//! "https://example.com/app/a%20b?x=1#top"
//!   ├─ split '#'  → hash_original "#top"
//!   ├─ split '?'  → search_original "?x=1"
//!   ├─ resolve    → origin "https://example.com", pathname "/app/a%20b"
//!   ├─ strip base → "/a%20b" (has_base_server)
//!   └─ decode     → "/a b"
//! ```
//!
//! Each split consumes the first remaining delimiter, so `#` wins over `?`
//! and `?` wins over the path.

mod resolve;
mod search;

use url::Url;

use crate::base::strip_base_server;
use crate::core::{ParsedUrl, is_parsable};
use crate::utils::decode::{decode_pathname, decode_safe};

pub use resolve::{Resolved, resolve_origin};
pub use search::SearchParams;

/// Decompose `url` relative to the server base path `base_server`.
///
/// Relative input is resolved as if no document were loaded; use
/// [`UrlParser::with_document_base`] to supply one.
///
/// # Panics
///
/// Panics if `url` is not [parsable](crate::is_parsable) or `base_server` does
/// not start with `/`. Both are caller contract violations.
///
/// # Examples
/// ```
/// use urlmount::parse_url;
/// let parsed = parse_url("/app/about?x=1&x=2#top", "/app/");
/// assert_eq!(parsed.pathname, "/about");
/// assert!(parsed.has_base_server);
/// assert_eq!(parsed.search["x"], "2");
/// assert_eq!(parsed.search_all["x"], ["1", "2"]);
/// assert_eq!(parsed.hash, "top");
/// ```
pub fn parse_url(url: &str, base_server: &str) -> ParsedUrl {
    UrlParser::new(base_server).parse(url)
}

/// URL decomposer bound to a base path and an optional document base.
#[derive(Debug, Clone, Copy)]
pub struct UrlParser<'a> {
    base_server: &'a str,
    document_base: Option<&'a Url>,
}

impl<'a> UrlParser<'a> {
    /// Create a parser for the given server base path.
    pub const fn new(base_server: &'a str) -> Self {
        Self {
            base_server,
            document_base: None,
        }
    }

    /// Resolve relative input against a document base instead of the base path.
    pub fn with_document_base(mut self, document_base: &'a Url) -> Self {
        self.document_base = Some(document_base);
        self
    }

    /// The configured server base path.
    #[inline]
    pub const fn base_server(&self) -> &'a str {
        self.base_server
    }

    /// Decompose `url`. See [`parse_url`].
    pub fn parse(&self, url: &str) -> ParsedUrl {
        let base_server = self.base_server;
        assert!(is_parsable(url), "url is not parsable: url={url:?}");
        assert!(
            base_server.starts_with('/'),
            "base server must start with `/`: url={url:?} base_server={base_server:?}"
        );

        // Hash
        let (without_hash, hash_original) = split_at_first(url, '#');
        let hash = hash_original
            .map(|raw| decode_safe(&raw[1..]).into_owned())
            .unwrap_or_default();

        // Search
        let (without_search, search_original) = split_at_first(without_hash, '?');
        let params = search_original.map(SearchParams::parse).unwrap_or_default();

        // Origin + pathname
        let resolved = resolve_origin(without_search, base_server, self.document_base);
        let origin_len = resolved.origin.as_deref().map_or(0, str::len);
        let pathname_original = &without_search[origin_len..];

        let recreated = format!(
            "{}{pathname_original}{}{}",
            resolved.origin.as_deref().unwrap_or_default(),
            search_original.unwrap_or_default(),
            hash_original.unwrap_or_default(),
        );
        assert_eq!(
            url, recreated,
            "decomposition must rebuild the input: origin={:?} pathname_original={pathname_original:?} \
             search_original={search_original:?} hash_original={hash_original:?}",
            resolved.origin
        );

        // Base path
        let stripped = strip_base_server(&resolved.pathname, base_server);
        let pathname = decode_pathname(&stripped.pathname);
        assert!(
            pathname.starts_with('/'),
            "decoded pathname must start with `/`: url={url:?} pathname={pathname:?}"
        );

        ParsedUrl {
            origin: resolved.origin,
            pathname,
            pathname_original: pathname_original.to_string(),
            has_base_server: stripped.has_base_server,
            search: params.last,
            search_all: params.all,
            search_original: search_original.map(str::to_string),
            hash,
            hash_original: hash_original.map(str::to_string),
        }
    }
}

/// Split before the first `delimiter`; the second part keeps the delimiter.
#[inline]
fn split_at_first(value: &str, delimiter: char) -> (&str, Option<&str>) {
    match value.find(delimiter) {
        Some(pos) => (&value[..pos], Some(&value[pos..])),
        None => (value, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_roundtrip(url: &str, base_server: &str) -> ParsedUrl {
        let parsed = parse_url(url, base_server);
        assert_eq!(parsed.to_original(), url, "base_server={base_server:?}");
        assert!(parsed.pathname.starts_with('/'), "{parsed:?}");
        parsed
    }

    #[test]
    fn test_query_and_hash() {
        let parsed = parse_url("/about?x=1&x=2#top", "/");
        assert_eq!(parsed.origin, None);
        assert_eq!(parsed.pathname, "/about");
        assert_eq!(parsed.pathname_original, "/about");
        assert!(parsed.has_base_server);
        assert_eq!(parsed.search.len(), 1);
        assert_eq!(parsed.search["x"], "2");
        assert_eq!(parsed.search_all["x"], ["1", "2"]);
        assert_eq!(parsed.search_original.as_deref(), Some("?x=1&x=2"));
        assert_eq!(parsed.hash, "top");
        assert_eq!(parsed.hash_original.as_deref(), Some("#top"));
    }

    #[test]
    fn test_base_server_stripped() {
        let parsed = parse_url("/app/about", "/app/");
        assert_eq!(parsed.pathname, "/about");
        assert_eq!(parsed.pathname_original, "/app/about");
        assert!(parsed.has_base_server);
    }

    #[test]
    fn test_base_server_trailing_slash_equivalence() {
        let parsed = parse_url("/app", "/app/");
        assert!(parsed.has_base_server);
        assert_eq!(parsed.pathname, "/");
        assert_eq!(parsed.pathname_original, "/app");
    }

    #[test]
    fn test_base_server_repeated_trailing_slash() {
        let mounted = crate::prepend_base("/x", "/app//");
        assert_eq!(mounted, "/app/x");
        let parsed = parse_url(&mounted, "/app//");
        assert!(parsed.has_base_server);
        assert_eq!(parsed.pathname, "/x");
    }

    #[test]
    fn test_uppercase_scheme_is_not_parsable() {
        assert!(!is_parsable("HTTPS://EXAMPLE.COM/X"));
        let parsed = parse_url("http://EXAMPLE.COM/X", "/");
        assert_eq!(parsed.origin.as_deref(), Some("http://EXAMPLE.COM"));
        assert_eq!(parsed.pathname, "/X");
    }

    #[test]
    fn test_base_server_not_matched() {
        let parsed = parse_url("/other/page", "/app/");
        assert!(!parsed.has_base_server);
        assert_eq!(parsed.pathname, "/other/page");
    }

    #[test]
    fn test_protocol_relative() {
        let parsed = parse_url("//cdn.example.com/x", "/");
        assert_eq!(parsed.origin, None);
        assert_eq!(parsed.pathname, "//cdn.example.com/x");
        assert_eq!(parsed.pathname_original, "//cdn.example.com/x");
    }

    #[test]
    fn test_encoded_slash_stays_one_segment() {
        let parsed = parse_url("/a%2Fb/c", "/");
        assert_eq!(parsed.pathname, "/a%2Fb/c");
        assert_eq!(parsed.pathname.split('/').collect::<Vec<_>>(), ["", "a%2Fb", "c"]);
    }

    #[test]
    fn test_absolute_with_base() {
        let parsed = parse_url("https://example.com/app/posts/%E4%B8%AD%E6%96%87?p=1#h", "/app");
        assert_eq!(parsed.origin.as_deref(), Some("https://example.com"));
        assert_eq!(parsed.pathname_original, "/app/posts/%E4%B8%AD%E6%96%87");
        assert_eq!(parsed.pathname, "/posts/中文");
        assert!(parsed.has_base_server);
        assert_eq!(parsed.search_value("p"), Some("1"));
        assert_eq!(parsed.hash, "h");
    }

    #[test]
    fn test_absolute_without_path() {
        let parsed = assert_roundtrip("https://example.com", "/");
        assert_eq!(parsed.origin.as_deref(), Some("https://example.com"));
        assert_eq!(parsed.pathname_original, "");
        assert_eq!(parsed.pathname, "/");
    }

    #[test]
    fn test_hash_before_query() {
        // `?` after `#` belongs to the hash
        let parsed = parse_url("/a#frag?x=1", "/");
        assert_eq!(parsed.pathname, "/a");
        assert_eq!(parsed.search_original, None);
        assert!(parsed.search.is_empty());
        assert_eq!(parsed.hash, "frag?x=1");
        assert_eq!(parsed.hash_original.as_deref(), Some("#frag?x=1"));
    }

    #[test]
    fn test_multiple_delimiters() {
        let parsed = assert_roundtrip("/a?b?c#d#e", "/");
        assert_eq!(parsed.search_original.as_deref(), Some("?b?c"));
        assert_eq!(parsed.hash_original.as_deref(), Some("#d#e"));
        assert_eq!(parsed.hash, "d#e");
    }

    #[test]
    fn test_hash_decoding() {
        let parsed = parse_url("/#caf%C3%A9", "/");
        assert_eq!(parsed.hash, "café");
        let parsed = parse_url("/#100%", "/");
        assert_eq!(parsed.hash, "100%");
    }

    #[test]
    fn test_empty_delimiters() {
        let parsed = assert_roundtrip("/?#", "/");
        assert_eq!(parsed.search_original.as_deref(), Some("?"));
        assert_eq!(parsed.hash_original.as_deref(), Some("#"));
        assert_eq!(parsed.hash, "");
        assert!(parsed.search.is_empty());
    }

    #[test]
    fn test_query_only_and_hash_only() {
        let parsed = assert_roundtrip("?page=2", "/app/");
        assert_eq!(parsed.pathname_original, "");
        assert_eq!(parsed.pathname, "/");
        assert!(parsed.has_base_server);
        assert_eq!(parsed.search_value("page"), Some("2"));

        let parsed = assert_roundtrip("#top", "/");
        assert_eq!(parsed.pathname, "/");
        assert_eq!(parsed.hash, "top");
    }

    #[test]
    fn test_empty_url() {
        let parsed = assert_roundtrip("", "/");
        assert_eq!(parsed.origin, None);
        assert_eq!(parsed.pathname, "/");
        assert_eq!(parsed.search_original, None);
        assert_eq!(parsed.hash_original, None);
    }

    #[test]
    fn test_dot_relative() {
        let parsed = assert_roundtrip("./docs/intro", "/app/");
        assert_eq!(parsed.pathname, "/docs/intro");
        assert!(parsed.has_base_server);
    }

    #[test]
    fn test_malformed_encoding_is_kept() {
        let parsed = assert_roundtrip("/bad%zz/%FF", "/");
        assert_eq!(parsed.pathname, "/bad%zz/%FF");
    }

    #[test]
    fn test_document_base() {
        let document = Url::parse("https://example.com/app/guide/").unwrap();
        let parsed = UrlParser::new("/app/")
            .with_document_base(&document)
            .parse("./intro?x=1");
        assert_eq!(parsed.origin, None);
        assert_eq!(parsed.pathname, "/guide/intro");
        assert!(parsed.has_base_server);
        assert_eq!(parsed.to_original(), "./intro?x=1");
    }

    #[test]
    fn test_roundtrip_corpus() {
        let urls = [
            "",
            "/",
            "?",
            "#",
            ".",
            "./",
            "../up",
            "/a/b/c/",
            "/a%20b?q=%20#%20",
            "/中文/页面?名=值#锚",
            "//",
            "//host",
            "//host/p?q#h",
            "http://example.com",
            "https://example.com/",
            "https://example.com:8443/x?y#z",
            "http://example.com:80/x",
            "http://EXAMPLE.COM/X",
            "https://user:pw@example.com/x",
            "http:foo",
            "httpx://host/p",
            "http://[bad/x",
            "/a/../../b",
            "/a\\b",
        ];
        for base_server in ["/", "/app", "/app/", "/app//", "/a/b/"] {
            for url in urls {
                assert_roundtrip(url, base_server);
            }
        }
    }

    #[test]
    #[should_panic(expected = "url is not parsable")]
    fn test_unparsable_url_panics() {
        parse_url("about", "/");
    }

    #[test]
    #[should_panic(expected = "base server must start with")]
    fn test_invalid_base_server_panics() {
        parse_url("/about", "app");
    }
}
