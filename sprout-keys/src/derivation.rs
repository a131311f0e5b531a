//! The shielded key derivation pipeline.
//!
//! Stages run strictly forward: phrase -> secret key (a_sk) -> paying key
//! (a_pk) and transmission scalar (sk_enc) -> clamped scalar -> transmission
//! key (pk_enc). Every stage is a pure function of its predecessor's output.

use crate::backend::CryptoBackend;
use crate::types::{ClampedScalar, PayingKey, SecretKey, TransmissionKey, TransmissionScalar};
use crate::KeyError;

/// Clamping mask for byte 0: clear the low 3 bits.
///
/// Forces the scalar to a multiple of the cofactor (8), so multiplication
/// lands in the prime-order subgroup.
pub const CLAMP_LOW_MASK: u8 = 0b1111_1000;

/// Clamping mask for byte 31: clear the high bit.
pub const CLAMP_HIGH_MASK: u8 = 0b0111_1111;

/// Clamping bit for byte 31: set bit 6, fixing the scalar's most
/// significant bit per the Curve25519 usage convention.
pub const CLAMP_HIGH_SET: u8 = 0b0100_0000;

/// Derive the root secret key (a_sk) from a passphrase.
///
/// Delegates to the backend's key derivation primitive for the raw 32
/// bytes; the [`SecretKey`] constructor then clears the top nibble of
/// byte 0 unconditionally. The empty phrase is valid and deterministic.
///
/// # Errors
/// Returns [`KeyError::InvalidInput`] if the backend cannot produce output
/// for the phrase.
pub fn derive_secret_key<B: CryptoBackend>(
    backend: &B,
    phrase: &str,
) -> Result<SecretKey, KeyError> {
    let raw = backend.raw_key(phrase)?;
    Ok(SecretKey::from_bytes(raw))
}

/// Derive the paying key (a_pk) from the secret key.
///
/// A pure application of the backend's first address PRF; re-invocation on
/// the same secret key always yields bit-identical output.
pub fn derive_paying_key<B: CryptoBackend>(
    backend: &B,
    a_sk: &SecretKey,
) -> Result<PayingKey, KeyError> {
    let bytes = backend.prf_addr_a_pk(a_sk.as_bytes())?;
    Ok(PayingKey::new(bytes))
}

/// Derive the pre-clamp transmission scalar (sk_enc) from the secret key.
///
/// Uses the backend's second address PRF, independent of the paying key
/// derivation.
pub fn derive_transmission_scalar<B: CryptoBackend>(
    backend: &B,
    a_sk: &SecretKey,
) -> Result<TransmissionScalar, KeyError> {
    let bytes = backend.prf_addr_sk_enc(a_sk.as_bytes())?;
    Ok(TransmissionScalar::from_bytes(bytes))
}

/// Clamp a transmission scalar for Curve25519 use.
///
/// Applies the standard bit pattern:
///
/// ```text
/// scalar[0]  &= 0b1111_1000   (clear low 3 bits)
/// scalar[31] &= 0b0111_1111   (clear high bit)
/// scalar[31] |= 0b0100_0000   (set second-highest bit)
/// ```
///
/// The clear on byte 31 is applied before the set, so the bit just set is
/// never re-cleared. Clamping is idempotent.
pub fn clamp_scalar(scalar: &TransmissionScalar) -> ClampedScalar {
    let mut bytes = *scalar.as_bytes();
    bytes[0] &= CLAMP_LOW_MASK;
    bytes[31] &= CLAMP_HIGH_MASK;
    bytes[31] |= CLAMP_HIGH_SET;
    ClampedScalar::new(bytes)
}

/// Multiply a clamped scalar against the Curve25519 base point, producing
/// the transmission public key (pk_enc).
///
/// # Errors
/// Returns [`KeyError::CryptoBackend`] if the backend rejects the scalar.
/// A clamped scalar is always valid, so this is a fatal backend invariant
/// violation rather than a runtime condition.
pub fn base_point_multiply<B: CryptoBackend>(
    backend: &B,
    scalar: &ClampedScalar,
) -> Result<TransmissionKey, KeyError> {
    let bytes = backend.scalar_mult_base(scalar.as_bytes())?;
    Ok(TransmissionKey::new(bytes))
}

/// Derive the transmission key (pk_enc) from the secret key.
///
/// Composes the scalar derivation, clamp, and base-point multiplication
/// stages.
pub fn derive_transmission_key<B: CryptoBackend>(
    backend: &B,
    a_sk: &SecretKey,
) -> Result<TransmissionKey, KeyError> {
    let scalar = derive_transmission_scalar(backend, a_sk)?;
    let clamped = clamp_scalar(&scalar);
    base_point_multiply(backend, &clamped)
}
