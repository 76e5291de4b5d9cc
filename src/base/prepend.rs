//! Mounting root-relative URLs under a base.

use super::{is_base_assets, normalize_base_assets, normalize_base_server};

/// Mount a root-relative URL under a base path or an asset origin.
///
/// - Asset origin (`https://cdn.example.com/`): origin + `url`
/// - Root base (`/`): `url` unchanged
/// - Other base paths (`/app/`): normalized base + `url`
///
/// The join point never carries a doubled `/`.
///
/// # Panics
///
/// Panics if `url` does not start with `/`, or if `base` is neither an asset
/// origin nor a path starting with `/`.
///
/// # Examples
/// ```
/// use urlmount::prepend_base;
/// assert_eq!(prepend_base("/img.png", "https://cdn.example.com/"), "https://cdn.example.com/img.png");
/// assert_eq!(prepend_base("/about", "/app/"), "/app/about");
/// assert_eq!(prepend_base("/about", "/"), "/about");
/// ```
pub fn prepend_base(url: &str, base: &str) -> String {
    assert!(
        url.starts_with('/'),
        "url to mount must be root-relative: url={url:?} base={base:?}"
    );

    if is_base_assets(base) {
        return format!("{}{url}", normalize_base_assets(base));
    }

    assert!(
        base.starts_with('/'),
        "base server must start with `/`: base={base:?}"
    );
    match normalize_base_server(base) {
        "/" => url.to_string(),
        normalized => format!("{normalized}{url}"),
    }
}
