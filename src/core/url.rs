//! Decomposed URL value.
//!
//! - Decoded fields (`pathname`, `search`, `hash`): human-readable, for routing
//! - `*_original` fields: exact substrings of the input, for rebuilding it

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Structured decomposition of a URL string.
///
/// Invariants:
/// - `pathname` always starts with `/`
/// - `origin + pathname_original + search_original + hash_original` is the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    /// Scheme + authority of an absolute input (`https://example.com`).
    pub origin: Option<String>,
    /// Decoded pathname with the base path stripped.
    pub pathname: String,
    /// Raw pathname as it appears in the input (not decoded, base kept).
    pub pathname_original: String,
    /// Whether the pathname lies under the configured base path.
    pub has_base_server: bool,
    /// Query parameters, last value per key.
    pub search: FxHashMap<String, String>,
    /// Query parameters, every value per key in encounter order.
    pub search_all: FxHashMap<String, Vec<String>>,
    /// Raw query including the leading `?`.
    pub search_original: Option<String>,
    /// Decoded fragment without the leading `#` (empty if none).
    pub hash: String,
    /// Raw fragment including the leading `#`.
    pub hash_original: Option<String>,
}

impl ParsedUrl {
    /// Rebuild the exact input string.
    pub fn to_original(&self) -> String {
        format!(
            "{}{}{}{}",
            self.origin.as_deref().unwrap_or_default(),
            self.pathname_original,
            self.search_original.as_deref().unwrap_or_default(),
            self.hash_original.as_deref().unwrap_or_default(),
        )
    }

    /// Check if the input carried its own origin.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.origin.is_some()
    }

    /// Last value of a query parameter.
    #[inline]
    pub fn search_value(&self, key: &str) -> Option<&str> {
        self.search.get(key).map(String::as_str)
    }

    /// All values of a query parameter (empty if absent).
    #[inline]
    pub fn search_values(&self, key: &str) -> &[String] {
        self.search_all.get(key).map_or(&[], Vec::as_slice)
    }
}

impl std::fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_original())
    }
}
