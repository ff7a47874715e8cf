//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256. Every hashed surface has its own null-terminated
//! domain prefix so that equal bytes from different surfaces never collide.

use sha2::{Digest, Sha256};

/// A digest tagged with its algorithm, rendered `"sha256:<hex>"`.
///
/// Only [`canonical_hash`] and [`ContentHash::parse`] build one, so the
/// separator position is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Read back a digest printed by [`ContentHash::as_str`], e.g. from a
    /// fixture's stdout.
    ///
    /// Accepts `<algorithm>:<digest>` with both parts non-empty. For
    /// `sha256` the digest must also be 64 lowercase hex characters.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (algorithm, digest) = s.split_once(':')?;
        if algorithm.is_empty() || digest.is_empty() {
            return None;
        }
        if algorithm == "sha256" && !is_sha256_hex(digest) {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon: algorithm.len(),
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

fn is_sha256_hex(digest: &str) -> bool {
    digest.len() == 64
        && digest
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Domain prefix for tree node fingerprints (action list + target).
pub const DOMAIN_TREE_NODE: &[u8] = b"SPACECUT::TREE_NODE::V1\0";

/// Domain prefix for emitted formula documents.
pub const DOMAIN_FORMULA: &[u8] = b"SPACECUT::FORMULA::V1\0";

/// Hash `data` under `domain`.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex}");
    ContentHash { full, colon: 6 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_hash_parse_valid() {
        let h = ContentHash::parse("blake3:abcdef0123456789").unwrap();
        assert_eq!(h.algorithm(), "blake3");
        assert_eq!(h.hex_digest(), "abcdef0123456789");
    }

    #[test]
    fn sha256_digest_must_be_full_lowercase_hex() {
        assert!(ContentHash::parse("sha256:abcdef").is_none());
        let upper = format!("sha256:{}", "A".repeat(64));
        assert!(ContentHash::parse(&upper).is_none());
        let good = format!("sha256:{}", "0a".repeat(32));
        assert!(ContentHash::parse(&good).is_some());
    }

    #[test]
    fn content_hash_parse_rejects_bad_format() {
        assert!(ContentHash::parse("nocolon").is_none());
        assert!(ContentHash::parse(":noalg").is_none());
        assert!(ContentHash::parse("nodigest:").is_none());
    }

    #[test]
    fn canonical_hash_is_sha256_hex() {
        let h = canonical_hash(DOMAIN_TREE_NODE, b"abc");
        assert_eq!(h.algorithm(), "sha256");
        assert_eq!(h.hex_digest().len(), 64);
        assert_eq!(ContentHash::parse(h.as_str()), Some(h.clone()));
        assert_eq!(h, canonical_hash(DOMAIN_TREE_NODE, b"abc"));
    }

    #[test]
    fn domains_separate_equal_bytes() {
        assert_ne!(
            canonical_hash(DOMAIN_TREE_NODE, b"x"),
            canonical_hash(DOMAIN_FORMULA, b"x")
        );
    }

    #[test]
    fn domain_prefixes_are_null_terminated() {
        assert!(DOMAIN_TREE_NODE.ends_with(&[0]));
        assert!(DOMAIN_FORMULA.ends_with(&[0]));
    }
}
