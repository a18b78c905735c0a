//! Seed — the 256-bit genome of a sigil
//!
//! A seed is an opaque 32-byte value supplied by the minting layer, the sole
//! source of entropy. Every trait and every byte of the artwork is a pure
//! function of it. No internal structure is assumed beyond the bit pattern.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of bytes in a seed.
pub const SEED_BYTES: usize = 32;

/// Number of bits in a seed.
pub const SEED_BITS: usize = 256;

/// Seed parsing errors (boundary input only; a constructed seed is always valid)
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed is not valid hex: {0}")]
    InvalidHex(String),

    #[error("seed must be 32 bytes, got {got}")]
    InvalidLength { got: usize },
}

/// An opaque 256-bit seed. Immutable once minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; SEED_BYTES]);

impl Seed {
    /// Wrap raw bytes as a seed.
    pub fn from_bytes(bytes: [u8; SEED_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, SeedError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(s).map_err(|e| SeedError::InvalidHex(e.to_string()))?;
        if raw.len() != SEED_BYTES {
            return Err(SeedError::InvalidLength { got: raw.len() });
        }
        let mut bytes = [0u8; SEED_BYTES];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    /// Lowercase hex rendition, most-significant nibble of byte 0 first.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.0
    }

    /// Byte at index 0..31.
    #[inline]
    pub fn byte(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// Count of set bits across all 256 bits.
    pub fn popcount(&self) -> u32 {
        self.0.iter().map(|b| b.count_ones()).sum()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// Persisted form is the 64-char hex string, not a byte array.
impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Seed::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let hex = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
        let seed = Seed::from_hex(hex).unwrap();
        assert_eq!(seed.to_hex(), hex);
        assert_eq!(seed.byte(0), 0x00);
        assert_eq!(seed.byte(2), 0x22);
        assert_eq!(seed.byte(31), 0xff);
    }

    #[test]
    fn test_hex_prefix_accepted() {
        let bare = "ff".repeat(32);
        let prefixed = format!("0x{}", bare);
        assert_eq!(
            Seed::from_hex(&bare).unwrap(),
            Seed::from_hex(&prefixed).unwrap()
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Seed::from_hex("zz").unwrap_err(),
            SeedError::InvalidHex(_)
        ));
        assert!(matches!(
            Seed::from_hex("aabb").unwrap_err(),
            SeedError::InvalidLength { got: 2 }
        ));
        assert!(Seed::from_hex(&"00".repeat(33)).is_err());
    }

    #[test]
    fn test_popcount() {
        assert_eq!(Seed::from_bytes([0u8; 32]).popcount(), 0);
        assert_eq!(Seed::from_bytes([0xffu8; 32]).popcount(), 256);

        let mut bytes = [0u8; 32];
        bytes[0] = 0x0f;
        bytes[31] = 0x80;
        assert_eq!(Seed::from_bytes(bytes).popcount(), 5);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let seed = Seed::from_bytes([0xabu8; 32]);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));
        let back: Seed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
    }
}
