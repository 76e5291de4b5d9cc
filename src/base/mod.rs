//! Base path handling.
//!
//! - [`normalize`]: canonical forms (`/app/` -> `/app`)
//! - [`strip`]: remove the base from a resolved pathname
//! - [`prepend`]: mount a root-relative URL under a base
//! - [`validate`]: usage checks and typed base values

mod normalize;
mod prepend;
mod strip;
mod validate;

pub use normalize::{normalize_base_assets, normalize_base_server};
pub use prepend::prepend_base;
pub use strip::{StrippedPath, strip_base_server};
pub use validate::{
    Base, BaseAssets, BaseServer, UsageError, validate_base_assets, validate_base_server,
};

pub use crate::utils::scheme::is_base_assets;
