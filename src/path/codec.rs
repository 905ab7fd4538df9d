//! Path codec
//!
//! Encoding and decoding between logical keys and (bucket, key) pairs.

use std::borrow::Cow;
use std::fmt;

use super::{DEFAULT_BUCKET, SEPARATOR};

/// A logical key decomposed into the engine's (bucket, key) pair
///
/// Derived transiently on every store call; only the two halves are ever
/// persisted. `bucket` is never empty for keys produced by [`encode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathKey {
    bucket: Vec<u8>,
    key: Vec<u8>,
}

impl PathKey {
    /// Build a pair from raw parts, as found when enumerating the engine
    pub fn new(bucket: impl Into<Vec<u8>>, key: impl Into<Vec<u8>>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Split a logical key at its last separator
    pub fn encode(logical: &str) -> Self {
        let (bucket, key) = match logical.rfind(SEPARATOR) {
            Some(idx) => (&logical[..idx], &logical[idx + SEPARATOR.len_utf8()..]),
            None => ("", logical),
        };

        // Applies to "no separator" and "separator at index 0" alike
        let bucket = if bucket.is_empty() { DEFAULT_BUCKET } else { bucket };

        Self::new(bucket, key)
    }

    pub fn bucket(&self) -> &[u8] {
        &self.bucket
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Bucket as the engine's table name
    ///
    /// Buckets built by `encode` are always valid UTF-8, so this only
    /// allocates for pairs constructed from foreign bytes.
    pub fn table_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bucket)
    }

    /// Key as text, for log fields
    pub fn key_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.key)
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&decode(&self.bucket, &self.key))
    }
}

/// Encode a logical key into its (bucket, key) pair
pub fn encode(logical: &str) -> PathKey {
    PathKey::encode(logical)
}

/// Join a bucket and key back into a logical key
///
/// Empty parts are skipped and the result is normalized, so neither
/// doubled nor trailing separators survive.
pub fn decode(bucket: &[u8], key: &[u8]) -> String {
    let bucket = String::from_utf8_lossy(bucket);
    let key = String::from_utf8_lossy(key);

    let joined = match (bucket.is_empty(), key.is_empty()) {
        (true, true) => return String::new(),
        (true, false) => key.into_owned(),
        (false, true) => bucket.into_owned(),
        (false, false) => format!("{bucket}{SEPARATOR}{key}"),
    };

    normalize(&joined)
}

/// Collapse runs of separators and drop a trailing one
///
/// A lone separator is kept. Dot segments are left untouched.
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == SEPARATOR && out.ends_with(SEPARATOR) {
            continue;
        }
        out.push(c);
    }

    if out.len() > SEPARATOR.len_utf8() && out.ends_with(SEPARATOR) {
        out.pop();
    }

    out
}
