//! Canonical content hashing with domain separation.
//!
//! **Exactly one place** defines canonical hashing in this crate. Every
//! caller that needs a primitive's identity as a map key or a state's
//! identity hash routes through [`canonical_hash`].

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g. `"sha256:abcdef..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex_digest"` format. Returns `None` if malformed.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if s[colon + 1..].contains(':') {
            return None;
        }
        let algorithm = &s[..colon];
        let digest = &s[colon + 1..];
        if algorithm.is_empty()
            || !algorithm
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return None;
        }
        if digest.is_empty()
            || !digest
                .bytes()
                .all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
        {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g. `"sha256"`).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

/// Domain prefix for a canonicalized `Point`'s identity bytes.
pub const DOMAIN_POINT: &[u8] = b"COMPASS::PRIMITIVE_POINT::V1\0";
/// Domain prefix for a canonicalized `Line`'s identity bytes.
pub const DOMAIN_LINE: &[u8] = b"COMPASS::PRIMITIVE_LINE::V1\0";
/// Domain prefix for a canonicalized `Circle`'s identity bytes.
pub const DOMAIN_CIRCLE: &[u8] = b"COMPASS::PRIMITIVE_CIRCLE::V1\0";
/// Domain prefix for a search state's commutative identity hash.
pub const DOMAIN_STATE: &[u8] = b"COMPASS::SEARCH_STATE::V1\0";

/// Compute `sha256(domain || data)` and return it as `"sha256:<hex>"`.
///
/// `domain` must be one of the null-terminated `DOMAIN_*` constants (or a
/// caller-defined one following the same convention) to keep hash spaces
/// for distinct primitive kinds from colliding.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    let hex = hex::encode(digest);
    let full = format!("sha256:{hex}");
    ContentHash { full, colon: 6 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_hash_parse_valid() {
        let h = ContentHash::parse("sha256:abcdef0123456789").unwrap();
        assert_eq!(h.algorithm(), "sha256");
        assert_eq!(h.hex_digest(), "abcdef0123456789");
    }

    #[test]
    fn content_hash_parse_rejects_bad_format() {
        assert!(ContentHash::parse("nocolon").is_none());
        assert!(ContentHash::parse(":noalg").is_none());
        assert!(ContentHash::parse("nodigest:").is_none());
        assert!(ContentHash::parse("sha256:abc:def").is_none());
        assert!(ContentHash::parse("SHA256:abcdef").is_none());
        assert!(ContentHash::parse("sha256:ABCDEF").is_none());
    }

    #[test]
    fn canonical_hash_deterministic() {
        let a = canonical_hash(DOMAIN_POINT, b"hello");
        let b = canonical_hash(DOMAIN_POINT, b"hello");
        assert_eq!(a, b);
    }

    #[test]
    fn domain_separation_prevents_collision_across_kinds() {
        let p = canonical_hash(DOMAIN_POINT, b"same-bytes");
        let l = canonical_hash(DOMAIN_LINE, b"same-bytes");
        assert_ne!(p, l);
    }

    #[test]
    fn canonical_hash_is_well_formed() {
        let h = canonical_hash(DOMAIN_STATE, b"");
        assert!(ContentHash::parse(h.as_str()).is_some());
        assert_eq!(h.hex_digest().len(), 64);
    }
}
