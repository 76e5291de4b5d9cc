//! Query-string parsing.

use rustc_hash::FxHashMap;
use url::form_urlencoded;

/// Parsed query parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Last value per key.
    pub last: FxHashMap<String, String>,
    /// Every value per key, in encounter order.
    pub all: FxHashMap<String, Vec<String>>,
}

impl SearchParams {
    /// Parse a raw query (`?a=1&b=2`, leading `?` optional).
    ///
    /// Uses `application/x-www-form-urlencoded` rules: `+` is a space and
    /// malformed escapes decode lossily.
    pub fn parse(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let (key, value) = (key.into_owned(), value.into_owned());
            params
                .all
                .entry(key.clone())
                .or_default()
                .push(value.clone());
            params.last.insert(key, value);
        }
        params
    }
}
