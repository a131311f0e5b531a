//! Checksummed base-58 encoding of keys and addresses.
//!
//! Both encoded forms share one layout: version-prefix bytes first, then
//! the key material, then a 4-byte double-SHA-256 checksum, the whole
//! encoded in base-58. Reversing the prefix/material order would produce a
//! different, incompatible address space, so the payload is assembled in
//! one place per format and nowhere else.

use sha2::{Digest, Sha256};
use sprout_keys::{PayingKey, SecretKey, TransmissionKey};

use crate::{AddressError, NetworkParams};

/// Encode a secret key as a versioned, checksummed spending-key string.
///
/// # Format
/// ```text
/// base58( [spending_key_prefix:2][a_sk:32][checksum:4] )
/// ```
pub fn encode_spending_key(params: &NetworkParams, a_sk: &SecretKey) -> String {
    let mut payload = Vec::with_capacity(2 + 32);
    payload.extend_from_slice(&params.spending_key_prefix);
    payload.extend_from_slice(a_sk.as_bytes());
    encode_checked(&payload)
}

/// Encode a paying key and transmission key as a versioned, checksummed
/// payment-address string.
///
/// # Format
/// ```text
/// base58( [payment_address_prefix:2][a_pk:32][pk_enc:32][checksum:4] )
/// ```
pub fn encode_address(
    params: &NetworkParams,
    a_pk: &PayingKey,
    pk_enc: &TransmissionKey,
) -> String {
    let mut payload = Vec::with_capacity(2 + 32 + 32);
    payload.extend_from_slice(&params.payment_address_prefix);
    payload.extend_from_slice(a_pk.as_bytes());
    payload.extend_from_slice(pk_enc.as_bytes());
    encode_checked(&payload)
}

/// Append the checksum and encode in base-58.
///
/// Infallible: base-58 encoding accepts any byte payload, and both payload
/// layouts are fixed-size.
fn encode_checked(payload: &[u8]) -> String {
    let checksum = compute_checksum(payload);
    let mut bytes = Vec::with_capacity(payload.len() + 4);
    bytes.extend_from_slice(payload);
    bytes.extend_from_slice(&checksum);
    bs58::encode(&bytes).into_string()
}

/// Decode a checksummed base-58 string back to its payload, verifying the
/// checksum.
///
/// Only the checksum mechanism is verified here; no address-level parsing
/// happens in this crate (construction direction only).
pub(crate) fn decode_checked(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let bytes = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

    if bytes.len() < 4 {
        return Err(AddressError::InvalidLength {
            expected: 4,
            actual: bytes.len(),
        });
    }

    let checksum_start = bytes.len() - 4;
    let payload = &bytes[..checksum_start];
    let provided_checksum = &bytes[checksum_start..];

    if provided_checksum != compute_checksum(payload) {
        return Err(AddressError::InvalidChecksum);
    }

    Ok(payload.to_vec())
}

/// Compute the 4-byte double SHA-256 checksum.
fn compute_checksum(payload: &[u8]) -> [u8; 4] {
    let hash1 = Sha256::digest(payload);
    let hash2 = Sha256::digest(hash1);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&hash2[..4]);
    checksum
}
