//! URL input classification.

/// Syntactic form of a URL handed to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind<'a> {
    /// Starts with `http` (`https://example.com/x`). Usually carries an origin.
    Absolute(&'a str),
    /// Protocol-relative (`//cdn.example.com/x`). Kept as a literal path.
    ProtocolRelative(&'a str),
    /// Root-relative path (`/about`, `/posts/hello`).
    Root(&'a str),
    /// Dot-relative path (`./page`, `../other`).
    DotRelative(&'a str),
    /// Query without path (`?page=2`).
    Query(&'a str),
    /// Fragment without path or query (`#section`).
    Hash(&'a str),
    /// The empty string.
    Empty,
    /// Anything else (`mailto:x`, `page`, `ftp://host`). Not accepted by the parser.
    Unsupported(&'a str),
}

impl<'a> UrlKind<'a> {
    /// Classify a URL string by its leading characters.
    #[inline]
    pub fn parse(url: &'a str) -> Self {
        if url.is_empty() {
            Self::Empty
        } else if url.starts_with("//") {
            Self::ProtocolRelative(url)
        } else if url.starts_with('/') {
            Self::Root(url)
        } else if url.starts_with("http") {
            Self::Absolute(url)
        } else if url.starts_with('.') {
            Self::DotRelative(url)
        } else if url.starts_with('?') {
            Self::Query(url)
        } else if url.starts_with('#') {
            Self::Hash(url)
        } else {
            Self::Unsupported(url)
        }
    }

    /// Whether the parser accepts this form.
    #[inline]
    pub const fn is_parsable(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

/// Check whether [`parse_url`](crate::parse_url) accepts `url`.
///
/// Parsable URLs start with `/`, `http`, `.`, `?` or `#`, or are empty.
///
/// # Examples
/// ```
/// use urlmount::is_parsable;
/// assert!(is_parsable("/about"));
/// assert!(is_parsable("https://example.com"));
/// assert!(is_parsable(""));
/// assert!(!is_parsable("about"));
/// assert!(!is_parsable("mailto:user@example.com"));
/// ```
#[inline]
pub fn is_parsable(url: &str) -> bool {
    UrlKind::parse(url).is_parsable()
}
