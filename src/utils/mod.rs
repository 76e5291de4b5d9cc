//! Utility modules.
//!
//! Pure functions. No side effects.
//!
//! - [`decode`]: percent-decoding that never fails (`decode_safe`, `decode_pathname`)
//! - [`scheme`]: URL scheme detection (`has_scheme`, `is_base_assets`, `authority_len`)

pub mod decode;
pub mod scheme;
