//! Content hashing for structural signatures and artifact identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit content hash computed using XXH3.
///
/// Two byte sequences with the same `ContentHash` are assumed to be identical.
/// Used to fingerprint structural descriptors (e.g., a tile's aggregated
/// sub-block layout) so that equality checks reduce to a 16-byte compare.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equal_descriptors_hash_equal() {
        let a = ContentHash::from_bytes(b"pb:1 cbx:1 cby:1 sb:1");
        let b = ContentHash::from_bytes(b"pb:1 cbx:1 cby:1 sb:1");
        assert_eq!(a, b);
    }

    #[test]
    fn a_single_byte_flips_the_hash() {
        let with_sb = ContentHash::from_bytes(b"pb:1 sb:1");
        let without_sb = ContentHash::from_bytes(b"pb:1 sb:0");
        assert_ne!(with_sb, without_sb);
    }

    #[test]
    fn usable_as_a_signature_key() {
        let mut seen = HashSet::new();
        assert!(seen.insert(ContentHash::from_bytes(b"corner")));
        assert!(seen.insert(ContentHash::from_bytes(b"border")));
        assert!(!seen.insert(ContentHash::from_bytes(b"corner")));
    }

    #[test]
    fn display_is_full_hex() {
        let h = ContentHash::from_bytes(b"tile");
        let s = format!("{h}");
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn debug_abbreviated() {
        let s = format!("{:?}", ContentHash::from_bytes(b"tile"));
        assert!(s.starts_with("ContentHash("));
        assert!(s.ends_with(".)"));
    }

    #[test]
    fn serde_roundtrip() {
        let h = ContentHash::from_bytes(b"region_0");
        let json = serde_json::to_string(&h).unwrap();
        let back: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
