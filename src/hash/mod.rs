//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation.

pub mod sha256;
pub(crate) mod hmac;
pub(crate) mod rfc6979;
pub(crate) mod tagged;

/// Re-export of the SHA-256 convenience function.
pub use sha256::core::sha256;

pub(crate) use hmac::hmac_sha256;
pub(crate) use rfc6979::Rfc6979Drbg;
pub(crate) use tagged::tagged_hash;
