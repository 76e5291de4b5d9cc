//! `[base]` and `[resolve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [base]
//! server = "/app/"                     # Mount path of the application
//! assets = "https://cdn.example.com/"  # Serve assets from another origin
//!
//! [resolve]
//! document_base = "https://example.com/app/"  # Base for relative URLs
//! ```
//!
//! `server` must be a path. Absolute URLs belong in `assets`.

use serde::{Deserialize, Serialize};
use url::Url;

use super::{ConfigDiagnostics, FieldPath};
use crate::base::{UsageError, validate_base_assets, validate_base_server};

/// Base path settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSectionConfig {
    /// Path prefix the application is mounted under.
    /// - `/` (default): mounted at the server root
    /// - `/app/`: pages live under `/app/...`
    pub server: String,

    /// Absolute origin for asset links (e.g. a CDN).
    pub assets: Option<String>,
}

impl BaseSectionConfig {
    pub const SERVER: FieldPath = FieldPath::new("base.server");
    pub const ASSETS: FieldPath = FieldPath::new("base.assets");

    /// Check the base values, collecting every problem.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match validate_base_server(&self.server, "") {
            Ok(()) => {
                if self.server.contains("//") {
                    diag.warn(Self::SERVER, format!("`{}` contains `//`", self.server));
                }
            }
            Err(err @ UsageError::SchemeInBase { .. }) => diag.error_with_hint(
                Self::SERVER,
                err.to_string(),
                format!("move the value to `{}`", Self::ASSETS.as_str()),
            ),
            Err(err @ UsageError::RepeatedTrailingSlash { .. }) => diag.error_with_hint(
                Self::SERVER,
                err.to_string(),
                format!("use `{}/`", self.server.trim_end_matches('/')),
            ),
            Err(err) => diag.error_with_hint(
                Self::SERVER,
                err.to_string(),
                format!("use `/{}`", self.server),
            ),
        }

        if let Some(assets) = &self.assets
            && let Err(err) = validate_base_assets(assets, "")
        {
            diag.error(Self::ASSETS, err.to_string());
        }
    }
}

impl Default for BaseSectionConfig {
    fn default() -> Self {
        Self {
            server: "/".to_string(),
            assets: None,
        }
    }
}

/// Relative URL resolution settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveSectionConfig {
    /// Document base URL, as a browser would report it for the current page.
    /// Unset means relative URLs resolve against `base.server`.
    pub document_base: Option<String>,
}

impl ResolveSectionConfig {
    pub const DOCUMENT_BASE: FieldPath = FieldPath::new("resolve.document_base");

    /// Parsed document base, if configured and valid.
    pub fn document_base_url(&self) -> Option<Url> {
        self.document_base
            .as_deref()
            .and_then(|base| Url::parse(base).ok())
            .filter(Url::has_host)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(base) = &self.document_base
            && self.document_base_url().is_none()
        {
            diag.error_with_hint(
                Self::DOCUMENT_BASE,
                format!("`{base}` is not an absolute URL with a host"),
                "use a full URL such as `https://example.com/app/`",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_base_config() {
        let config = test_parse_config(
            "[base]\nserver = \"/app/\"\nassets = \"https://cdn.example.com/\"",
        );
        assert_eq!(config.base.server, "/app/");
        assert_eq!(
            config.base.assets.as_deref(),
            Some("https://cdn.example.com/")
        );
    }

    #[test]
    fn test_base_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.base.server, "/");
        assert!(config.base.assets.is_none());
        assert!(config.resolve.document_base.is_none());
    }

    #[test]
    fn test_base_validate_ok() {
        let mut diag = ConfigDiagnostics::new();
        let config = test_parse_config("[base]\nserver = \"/docs\"");
        config.base.validate(&mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_base_validate_scheme() {
        let mut diag = ConfigDiagnostics::new();
        let config = test_parse_config("[base]\nserver = \"https://example.com/\"");
        config.base.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        let error = &diag.errors()[0];
        assert_eq!(error.field, BaseSectionConfig::SERVER);
        assert!(error.hint.as_deref().unwrap().contains("base.assets"));
    }

    #[test]
    fn test_base_validate_missing_slash() {
        let mut diag = ConfigDiagnostics::new();
        let config = test_parse_config("[base]\nserver = \"app/\"");
        config.base.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("use `/app/`"));
    }

    #[test]
    fn test_base_validate_inner_doubled_slash_warns() {
        let mut diag = ConfigDiagnostics::new();
        let config = test_parse_config("[base]\nserver = \"/a//b/\"");
        config.base.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_base_validate_repeated_trailing_slash() {
        let mut diag = ConfigDiagnostics::new();
        let config = test_parse_config("[base]\nserver = \"/app//\"");
        config.base.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("at most one `/`"));
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("use `/app/`"));
    }

    #[test]
    fn test_base_validate_assets() {
        let mut diag = ConfigDiagnostics::new();
        let config = test_parse_config("[base]\nassets = \"/static/\"");
        config.base.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, BaseSectionConfig::ASSETS);
    }

    #[test]
    fn test_resolve_config() {
        let config =
            test_parse_config("[resolve]\ndocument_base = \"https://example.com/app/\"");
        let url = config.resolve.document_base_url().unwrap();
        assert_eq!(url.path(), "/app/");

        let mut diag = ConfigDiagnostics::new();
        config.resolve.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_resolve_validate_invalid() {
        for value in ["/app/", "mailto:x@example.com", "not a url"] {
            let config = test_parse_config(&format!("[resolve]\ndocument_base = \"{value}\""));
            let mut diag = ConfigDiagnostics::new();
            config.resolve.validate(&mut diag);
            assert_eq!(diag.len(), 1, "{value:?}");
        }
    }
}
