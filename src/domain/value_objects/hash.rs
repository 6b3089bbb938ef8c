//! Content Hash Value Object
//!
//! A fixed-width fingerprint of an asset's bytes. Used as asset metadata and
//! as the cache-busting segment of hash-embedded file names.

use std::fmt;

use sha1::{Digest, Sha1};

/// SHA-1 content hash, rendered as 40 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Length of the hex rendering
    pub const HEX_LEN: usize = 40;

    /// Compute the hash of `data`
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(format!("{:x}", Sha1::digest(data)))
    }

    /// Parse an existing hex digest
    ///
    /// Returns `None` unless `hex` is exactly 40 lowercase hex characters.
    pub fn parse(hex: &str) -> Option<Self> {
        is_hash_hex(hex).then(|| Self(hex.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// True if `s` is exactly 40 lowercase hex characters.
pub fn is_hash_hex(s: &str) -> bool {
    s.len() == ContentHash::HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
