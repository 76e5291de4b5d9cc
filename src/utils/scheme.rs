//! URL scheme detection.
//!
//! Shared by base-path validation, the prepender and [`UrlKind`](crate::UrlKind):
//! - Scheme token detection (`https:`, `mailto:`, `localhost:`)
//! - Asset-origin detection for mixed base values

/// Check if a string starts with a URL scheme token (`https:`, `mailto:`, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Start with an ASCII letter
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```
/// use urlmount::utils::scheme::has_scheme;
/// assert!(has_scheme("https://example.com"));
/// assert!(has_scheme("mailto:user@example.com"));
/// assert!(!has_scheme("/about"));
/// assert!(!has_scheme("./file:txt"));
/// ```
#[inline]
pub fn has_scheme(value: &str) -> bool {
    value.find(':').is_some_and(|pos| {
        let scheme = &value[..pos];
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Check if a base value points at an asset origin rather than a mount path.
///
/// Asset origins are absolute URLs (`https://cdn.example.com/`); mount paths
/// always start with `/`.
///
/// # Examples
/// ```
/// use urlmount::is_base_assets;
/// assert!(is_base_assets("https://cdn.example.com/"));
/// assert!(!is_base_assets("/app/"));
/// ```
#[inline]
pub fn is_base_assets(base: &str) -> bool {
    has_scheme(base)
}

/// Byte length of the literal `scheme:` + authority span at the start of `url`.
///
/// Returns `None` when `url` carries no scheme. The authority ends at the first
/// `/` or `\` following the `//` marker (or right after `scheme:` when no marker
/// is present).
///
/// # Examples
/// ```
/// use urlmount::utils::scheme::authority_len;
/// assert_eq!(authority_len("http://Example.com/x"), Some(18));
/// assert_eq!(authority_len("http://a@b.com"), Some(14));
/// assert_eq!(authority_len("/about"), None);
/// ```
pub fn authority_len(url: &str) -> Option<usize> {
    if !has_scheme(url) {
        return None;
    }
    let colon = url.find(':')?;
    let after_scheme = colon + 1;
    let rest = &url[after_scheme..];
    let marker = rest.len() - rest.trim_start_matches(['/', '\\']).len();
    let start = after_scheme + marker;
    let end = url[start..]
        .find(['/', '\\'])
        .map_or(url.len(), |pos| start + pos);
    Some(end)
}
