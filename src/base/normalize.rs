//! Canonical forms of configured base values.

/// Canonical form of a server base path.
///
/// Trailing slashes are dropped, except for the root `/` itself.
///
/// # Examples
/// ```
/// use urlmount::normalize_base_server;
/// assert_eq!(normalize_base_server("/app/"), "/app");
/// assert_eq!(normalize_base_server("/app"), "/app");
/// assert_eq!(normalize_base_server("/"), "/");
/// ```
#[inline]
pub fn normalize_base_server(base_server: &str) -> &str {
    match base_server.trim_end_matches('/') {
        "" if base_server.starts_with('/') => "/",
        trimmed => trimmed,
    }
}

/// Canonical form of an asset origin (no trailing slash).
///
/// # Examples
/// ```
/// use urlmount::normalize_base_assets;
/// assert_eq!(normalize_base_assets("https://cdn.example.com/"), "https://cdn.example.com");
/// assert_eq!(normalize_base_assets("https://cdn.example.com/v2"), "https://cdn.example.com/v2");
/// ```
#[inline]
pub fn normalize_base_assets(base_assets: &str) -> &str {
    base_assets.trim_end_matches('/')
}
