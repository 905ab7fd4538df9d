//! Tests for the path codec
//!
//! These tests verify:
//! - Splitting at the last separator
//! - Default bucket fallback
//! - Join normalization on decode
//! - The default-bucket asymmetry of decode(encode(k))

use pathmem::path::{decode, encode, normalize, PathKey, DEFAULT_BUCKET};

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_bucket_and_key() {
    let pk = encode("users/42");

    assert_eq!(pk.bucket(), b"users");
    assert_eq!(pk.key(), b"42");
}

#[test]
fn test_encode_splits_at_last_separator() {
    let pk = encode("org/team/users/42");

    assert_eq!(pk.bucket(), b"org/team/users");
    assert_eq!(pk.key(), b"42");
}

#[test]
fn test_encode_without_separator_uses_default_bucket() {
    let pk = encode("counter");

    assert_eq!(pk.bucket(), DEFAULT_BUCKET.as_bytes());
    assert_eq!(pk.key(), b"counter");
}

#[test]
fn test_encode_trailing_separator_yields_empty_key() {
    let pk = encode("users/");

    assert_eq!(pk.bucket(), b"users");
    assert_eq!(pk.key(), b"");
}

#[test]
fn test_encode_lone_separator_falls_back_to_default() {
    let pk = encode("/");

    assert_eq!(pk.bucket(), DEFAULT_BUCKET.as_bytes());
    assert_eq!(pk.key(), b"");
}

#[test]
fn test_encode_leading_separator_falls_back_to_default() {
    let pk = encode("/42");

    assert_eq!(pk.bucket(), DEFAULT_BUCKET.as_bytes());
    assert_eq!(pk.key(), b"42");
}

#[test]
fn test_encode_empty_key() {
    let pk = encode("");

    assert_eq!(pk.bucket(), DEFAULT_BUCKET.as_bytes());
    assert_eq!(pk.key(), b"");
}

#[test]
fn test_encode_bucket_is_never_empty() {
    for logical in ["", "/", "//", "a", "/a", "a/", "a/b", "a//b", "///x"] {
        assert!(!encode(logical).bucket().is_empty(), "empty bucket for {:?}", logical);
    }
}

#[test]
fn test_encode_keeps_multibyte_characters() {
    let pk = encode("café/naïve");

    assert_eq!(pk.bucket(), "café".as_bytes());
    assert_eq!(pk.key(), "naïve".as_bytes());
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_joins_with_separator() {
    assert_eq!(decode(b"users", b"42"), "users/42");
}

#[test]
fn test_decode_collapses_duplicate_separators() {
    assert_eq!(decode(b"users/", b"42"), "users/42");
    assert_eq!(decode(b"a//b/", b"/c"), "a/b/c");
}

#[test]
fn test_decode_drops_trailing_separator() {
    assert_eq!(decode(b"users", b""), "users");
    assert_eq!(decode(b"users/", b""), "users");
}

#[test]
fn test_decode_skips_empty_parts() {
    assert_eq!(decode(b"", b"42"), "42");
    assert_eq!(decode(b"", b""), "");
}

#[test]
fn test_decode_non_utf8_is_lossy() {
    let decoded = decode(b"bin", &[0xff, b'x']);

    assert_eq!(decoded, "bin/\u{fffd}x");
}

#[test]
fn test_path_key_display_matches_decode() {
    let pk = PathKey::new("users", "42");

    assert_eq!(pk.to_string(), "users/42");
    assert_eq!(pk.to_string(), decode(pk.bucket(), pk.key()));
}

// =============================================================================
// Normalization Tests
// =============================================================================

#[test]
fn test_normalize() {
    assert_eq!(normalize("a/b"), "a/b");
    assert_eq!(normalize("a//b"), "a/b");
    assert_eq!(normalize("a///b//"), "a/b");
    assert_eq!(normalize("/a/b"), "/a/b");
    assert_eq!(normalize("//"), "/");
    assert_eq!(normalize("/"), "/");
    assert_eq!(normalize(""), "");
}

#[test]
fn test_normalize_keeps_dot_segments() {
    assert_eq!(normalize("a/./b/../c"), "a/./b/../c");
}

// =============================================================================
// Round-trip Properties
// =============================================================================

#[test]
fn test_round_trip_with_bucket_prefix_is_normalized() {
    let inputs = [
        "users/42",
        "users//42",
        "org/team/users/42",
        "a/b/",
        "a//b//c",
        "x/./y",
        "_joe/counter",
    ];

    for k in inputs {
        assert_eq!(decode_encoded(k), normalize(k), "round trip of {:?}", k);
    }
}

#[test]
fn test_round_trip_without_separator_gains_default_bucket() {
    for k in ["counter", "42", "hello world"] {
        let decoded = decode_encoded(k);

        assert_ne!(decoded, k);
        assert_eq!(decoded, format!("{}/{}", DEFAULT_BUCKET, k));
    }
}

#[test]
fn test_default_bucket_key_and_explicit_key_collide() {
    // "counter" and "_joe/counter" address the same record
    assert_eq!(encode("counter"), encode("_joe/counter"));
}

fn decode_encoded(k: &str) -> String {
    let pk = encode(k);
    decode(pk.bucket(), pk.key())
}
