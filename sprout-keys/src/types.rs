//! Core key types for the Sprout-style shielded key hierarchy.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::KeyError;

/// Mask clearing the top nibble of the first secret key byte.
///
/// The protocol keeps a_sk to 252 effective bits so that every scalar
/// derived from it stays inside the safe range for the downstream curve
/// arithmetic. The mask is applied unconditionally on construction.
pub const SECRET_KEY_MASK: u8 = 0b0000_1111;

/// The root secret key of the shielded key hierarchy (a_sk).
///
/// All other key types derive from this value. The top four bits of byte 0
/// are always zero; the constructor enforces this, so the invariant holds
/// for every reachable `SecretKey`.
///
/// # Security
/// - Implements `ZeroizeOnDrop` to erase the key from memory
/// - Debug output is redacted to prevent key leakage in logs
/// - No equality impl: comparing secret material byte-wise is
///   variable-time, so callers must go through `as_bytes` deliberately
#[derive(Clone, ZeroizeOnDrop)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Create from raw bytes, clearing the high 4 bits of the first byte
    /// (256 bits clamped to 252).
    pub fn from_bytes(mut bytes: [u8; 32]) -> Self {
        bytes[0] &= SECRET_KEY_MASK;
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex (64 characters).
    ///
    /// # Security Warning
    /// The returned string contains the secret key. Callers who require
    /// secure erasure must zeroize it after use.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from a 64-character hex string.
    ///
    /// The top-nibble mask is applied, so round-tripping a derived key is
    /// lossless while arbitrary input is forced into the valid range.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let mut bytes = decode_hex_32(hex_str)?;
        let key = Self::from_bytes(bytes);
        bytes.zeroize();
        Ok(key)
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey([REDACTED])")
    }
}

/// The paying key (a_pk), a public identifier derived from a_sk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayingKey(pub [u8; 32]);

impl PayingKey {
    /// Create from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        decode_hex_32(hex_str).map(Self)
    }
}

/// The transmission public key (pk_enc), used to encrypt note ciphertexts
/// to the address owner.
///
/// Produced by clamping the transmission scalar and multiplying it against
/// the Curve25519 base point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransmissionKey(pub [u8; 32]);

impl TransmissionKey {
    /// Create from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        decode_hex_32(hex_str).map(Self)
    }
}

/// The pre-clamp transmission secret scalar (sk_enc), derived from a_sk.
///
/// This is secret material: it becomes the Curve25519 private key after
/// clamping.
#[derive(Clone, ZeroizeOnDrop)]
pub struct TransmissionScalar([u8; 32]);

impl TransmissionScalar {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for TransmissionScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransmissionScalar([REDACTED])")
    }
}

/// A Curve25519 scalar after clamping.
///
/// Only constructible through [`clamp_scalar`](crate::clamp_scalar), so the
/// clamping bit pattern (byte 0 low three bits cleared, byte 31 high bit
/// cleared and bit 6 set) holds for every reachable value.
#[derive(Clone, ZeroizeOnDrop)]
pub struct ClampedScalar([u8; 32]);

impl ClampedScalar {
    pub(crate) fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for ClampedScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClampedScalar([REDACTED])")
    }
}

/// Decode a 64-character hex string into 32 bytes.
fn decode_hex_32(hex_str: &str) -> Result<[u8; 32], KeyError> {
    let bytes = hex::decode(hex_str).map_err(|e| KeyError::InvalidInput(e.to_string()))?;

    if bytes.len() != 32 {
        return Err(KeyError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        });
    }

    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_key_masks_top_nibble() {
        let key = SecretKey::from_bytes([0xff; 32]);
        assert_eq!(key.as_bytes()[0], 0x0f);
        assert_eq!(key.as_bytes()[1], 0xff);
    }

    #[test]
    fn test_secret_key_hex_roundtrip() {
        let key = SecretKey::from_bytes([0x07; 32]);
        let recovered = SecretKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(key.as_bytes(), recovered.as_bytes());
    }

    #[test]
    fn test_secret_key_debug_redacted() {
        let key = SecretKey::from_bytes([0x07; 32]);
        let debug = format!("{:?}", key);
        assert!(!debug.contains("07"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_paying_key_hex_roundtrip() {
        let key = PayingKey::new([0xab; 32]);
        let hex = key.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(PayingKey::from_hex(&hex).unwrap(), key);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        let err = PayingKey::from_hex("abcd").unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidLength {
                expected: 32,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_from_hex_rejects_invalid_digits() {
        assert!(TransmissionKey::from_hex(&"zz".repeat(32)).is_err());
    }
}
