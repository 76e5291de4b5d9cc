//! Mount configuration management for `urlmount.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [base] and [resolve]
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── field      # FieldPath
//! ├── util       # config file discovery
//! └── mod.rs     # MountConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[base]`    | Server mount path and asset origin              |
//! | `[resolve]` | Document base used for relative URL resolution  |
//!
//! Configuration is loaded and validated once at startup; the parsing
//! functions themselves never read it.

mod error;
mod field;
mod section;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use section::{BaseSectionConfig, ResolveSectionConfig};
pub use util::find_config_file;

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

/// Default config file name.
pub const CONFIG_FILE: &str = "urlmount.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing urlmount.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountConfig {
    /// Absolute path to the config file (internal use only, empty if none)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Base path settings
    #[serde(default)]
    pub base: BaseSectionConfig,

    /// Relative URL resolution settings
    #[serde(default)]
    pub resolve: ResolveSectionConfig,
}

impl MountConfig {
    /// Locate and load the config file, searching upward from `start`.
    ///
    /// A missing file yields the default configuration, unless `config_name`
    /// is absolute (an explicit path that must exist).
    pub fn discover(config_name: &Path, start: &Path) -> Result<Self, ConfigError> {
        match find_config_file(config_name, start) {
            Some(path) => Self::from_path(&path),
            None if config_name.is_absolute() => {
                Err(ConfigError::NotFound(config_name.to_path_buf()))
            }
            None => {
                crate::debug!("config"; "no {} found, using defaults", config_name.display());
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        crate::debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Server base path as configured.
    #[inline]
    pub fn base_server(&self) -> &str {
        &self.base.server
    }

    /// Asset origin, if configured.
    #[inline]
    pub fn base_assets(&self) -> Option<&str> {
        self.base.assets.as_deref()
    }

    /// Parsed document base, if configured.
    pub fn document_base(&self) -> Option<Url> {
        self.resolve.document_base_url()
    }

    /// Check if a config file was loaded.
    #[inline]
    pub fn has_file(&self) -> bool {
        !self.config_path.as_os_str().is_empty()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.base.validate(&mut diag);
        self.resolve.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> MountConfig {
    let (parsed, ignored) = MountConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
