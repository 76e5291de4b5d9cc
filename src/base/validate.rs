//! Usage validation for configured base values.
//!
//! Base values come from the embedding application's configuration, so they
//! are checked once at startup. A bad value is reported with the offending
//! value and the expected shape; it never aborts the process by itself.

use thiserror::Error;

use super::{is_base_assets, normalize_base_assets, normalize_base_server};
use crate::utils::scheme::has_scheme;

/// Misconfigured base value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error(
        "{prefix}`base` is not allowed to start with a URL scheme (got `{base}`); use the asset base for absolute origins"
    )]
    SchemeInBase { prefix: String, base: String },

    #[error("{prefix}wrong `base` value `{base}`; `base` should start with `/`")]
    MissingLeadingSlash { prefix: String, base: String },

    #[error("{prefix}wrong `base` value `{base}`; `base` should end with at most one `/`")]
    RepeatedTrailingSlash { prefix: String, base: String },

    #[error("{prefix}wrong asset base `{base}`; it should be an absolute URL such as `https://cdn.example.com/`")]
    NotAnAssetOrigin { prefix: String, base: String },
}

/// Validate a user-supplied server base path.
///
/// `message_prefix` is prepended to the error message (e.g. the config field
/// that carried the value).
///
/// # Examples
/// ```
/// use urlmount::{validate_base_server, UsageError};
/// assert!(validate_base_server("/app/", "").is_ok());
/// assert!(matches!(
///     validate_base_server("https://example.com/", "[base.server] "),
///     Err(UsageError::SchemeInBase { .. })
/// ));
/// ```
pub fn validate_base_server(base: &str, message_prefix: &str) -> Result<(), UsageError> {
    if has_scheme(base) {
        return Err(UsageError::SchemeInBase {
            prefix: message_prefix.to_string(),
            base: base.to_string(),
        });
    }
    if !base.starts_with('/') {
        return Err(UsageError::MissingLeadingSlash {
            prefix: message_prefix.to_string(),
            base: base.to_string(),
        });
    }
    if base.ends_with("//") {
        return Err(UsageError::RepeatedTrailingSlash {
            prefix: message_prefix.to_string(),
            base: base.to_string(),
        });
    }
    Ok(())
}

/// Validate a user-supplied asset origin.
pub fn validate_base_assets(base: &str, message_prefix: &str) -> Result<(), UsageError> {
    let is_origin = is_base_assets(base)
        && url::Url::parse(base).is_ok_and(|parsed| parsed.has_host());
    if is_origin {
        Ok(())
    } else {
        Err(UsageError::NotAnAssetOrigin {
            prefix: message_prefix.to_string(),
            base: base.to_string(),
        })
    }
}

/// Validated server base path (keeps the value as written).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseServer(String);

impl BaseServer {
    /// Validate and wrap a server base path.
    pub fn new(base: impl Into<String>) -> Result<Self, UsageError> {
        let base = base.into();
        validate_base_server(&base, "")?;
        Ok(Self(base))
    }

    /// The base as configured (trailing slash preserved).
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical form without trailing slash.
    #[inline]
    pub fn normalized(&self) -> &str {
        normalize_base_server(&self.0)
    }

    /// Check if this is the root base `/`.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.normalized() == "/"
    }
}

impl Default for BaseServer {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl std::fmt::Display for BaseServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BaseServer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated asset origin (`https://cdn.example.com/`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseAssets(String);

impl BaseAssets {
    /// Validate and wrap an asset origin.
    pub fn new(base: impl Into<String>) -> Result<Self, UsageError> {
        let base = base.into();
        validate_base_assets(&base, "")?;
        Ok(Self(base))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical form without trailing slash.
    #[inline]
    pub fn normalized(&self) -> &str {
        normalize_base_assets(&self.0)
    }
}

impl std::fmt::Display for BaseAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BaseAssets {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Either kind of base, as accepted by [`prepend_base`](crate::prepend_base).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base {
    Server(BaseServer),
    Assets(BaseAssets),
}

impl Base {
    /// Classify by scheme and validate.
    ///
    /// # Examples
    /// ```
    /// use urlmount::Base;
    /// assert!(matches!(Base::parse("/app/"), Ok(Base::Server(_))));
    /// assert!(matches!(Base::parse("https://cdn.example.com"), Ok(Base::Assets(_))));
    /// assert!(Base::parse("app").is_err());
    /// ```
    pub fn parse(base: &str) -> Result<Self, UsageError> {
        if is_base_assets(base) {
            BaseAssets::new(base).map(Self::Assets)
        } else {
            BaseServer::new(base).map(Self::Server)
        }
    }

    /// Mount a root-relative URL under this base.
    pub fn prepend(&self, url: &str) -> String {
        crate::prepend_base(url, self.as_str())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Server(base) => base.as_str(),
            Self::Assets(base) => base.as_str(),
        }
    }
}
