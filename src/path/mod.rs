//! Path Codec Module
//!
//! Maps the flat, path-like logical key namespace onto the engine's
//! two-level (bucket, key) namespace.
//!
//! ## Mapping
//! ```text
//!   "users/admins/42"  ──encode──▶  bucket = "users/admins", key = "42"
//!   "42"               ──encode──▶  bucket = "_joe",         key = "42"
//!
//!   ("users/admins", "42") ──decode──▶ "users/admins/42"
//!   ("_joe", "42")         ──decode──▶ "_joe/42"
//! ```
//!
//! Keys without a separator gain the default bucket prefix on the way
//! back, so `decode(encode(k)) != k` for them.

mod codec;

pub use codec::{decode, encode, normalize, PathKey};

/// Path separator for logical keys
pub const SEPARATOR: char = '/';

/// Bucket used when a logical key has no bucket component
pub const DEFAULT_BUCKET: &str = "_joe";
