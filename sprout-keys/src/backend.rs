//! Pluggable cryptographic primitives behind the derivation pipeline.
//!
//! The pipeline itself is pure byte plumbing; everything cryptographic is
//! reached through the [`CryptoBackend`] trait so the byte-level rules
//! (masking, clamping, concatenation order) can be tested against fixed
//! stub vectors, independent of any primitive implementation.

use byteorder::{ByteOrder, LittleEndian};
use curve25519_dalek::montgomery::MontgomeryPoint;
use sha2::digest::generic_array::{typenum::U64, GenericArray};
use sha2::{Digest, Sha256};

use crate::KeyError;

/// Domain-separation bits for PRF^addr.
///
/// The two most significant bits of the first input byte distinguish this
/// use of the SHA-256 compression function from the protocol's other PRF
/// instantiations, keeping the functions independent.
const PRF_ADDR_DOMAIN: u8 = 0b1100_0000;

/// PRF^addr tag deriving the paying key (a_pk).
const PRF_TAG_A_PK: u8 = 0;

/// PRF^addr tag deriving the transmission scalar (sk_enc).
const PRF_TAG_SK_ENC: u8 = 1;

/// The cryptographic primitives consumed by the derivation pipeline.
///
/// Every method is deterministic: the same input must always produce
/// bit-identical output. Implementations hold no mutable state, so a
/// backend may be shared freely across threads.
pub trait CryptoBackend {
    /// Derive 32 raw key bytes from a passphrase.
    fn raw_key(&self, phrase: &str) -> Result<[u8; 32], KeyError>;

    /// PRF deriving the paying key from the secret key.
    fn prf_addr_a_pk(&self, a_sk: &[u8; 32]) -> Result<[u8; 32], KeyError>;

    /// PRF deriving the pre-clamp transmission scalar from the secret key.
    ///
    /// Must be independent of [`prf_addr_a_pk`](CryptoBackend::prf_addr_a_pk):
    /// calling one never affects the other's output.
    fn prf_addr_sk_enc(&self, a_sk: &[u8; 32]) -> Result<[u8; 32], KeyError>;

    /// Constant-time Curve25519 base-point multiplication.
    ///
    /// The scalar is always clamped before it reaches this method.
    fn scalar_mult_base(&self, scalar: &[u8; 32]) -> Result<[u8; 32], KeyError>;
}

/// Production backend instantiating the Sprout primitives.
///
/// - Phrase KDF: SHA-256 over the UTF-8 phrase bytes.
/// - PRF^addr: a single SHA-256 compression-function block over the secret
///   key with the domain bits set and a one-byte tag, per
///   <https://zips.z.cash/protocol/protocol.pdf#abstractprfs>.
/// - Base-point multiplication: X25519 via `curve25519-dalek`, which runs
///   in constant time with respect to the scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SproutBackend;

impl SproutBackend {
    /// Create a new backend.
    pub fn new() -> Self {
        Self
    }
}

impl CryptoBackend for SproutBackend {
    fn raw_key(&self, phrase: &str) -> Result<[u8; 32], KeyError> {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Ok(bytes)
    }

    fn prf_addr_a_pk(&self, a_sk: &[u8; 32]) -> Result<[u8; 32], KeyError> {
        Ok(prf_addr(a_sk, PRF_TAG_A_PK))
    }

    fn prf_addr_sk_enc(&self, a_sk: &[u8; 32]) -> Result<[u8; 32], KeyError> {
        Ok(prf_addr(a_sk, PRF_TAG_SK_ENC))
    }

    fn scalar_mult_base(&self, scalar: &[u8; 32]) -> Result<[u8; 32], KeyError> {
        // The scalar arrives clamped; `mul_base_clamped` re-applies the same
        // idempotent bit pattern, matching crypto_scalarmult_base semantics.
        Ok(MontgomeryPoint::mul_base_clamped(*scalar).to_bytes())
    }
}

/// PRF^addr, instantiated with the SHA-256 compression function.
///
/// The input block is the 32-byte secret key with the domain bits forced
/// into byte 0, the tag in byte 32, and zero padding; the output is the
/// little-endian serialization of the compression state.
fn prf_addr(x: &[u8; 32], t: u8) -> [u8; 32] {
    let mut state = [0u32; 8];
    let mut block = GenericArray::<u8, U64>::default();

    block.as_mut_slice()[0..32].copy_from_slice(&x[..]);
    block.as_mut_slice()[0] |= PRF_ADDR_DOMAIN;
    block.as_mut_slice()[32] = t;

    sha2::compress256(&mut state, &[block]);

    let mut derived_bytes = [0u8; 32];
    LittleEndian::write_u32_into(&state, &mut derived_bytes);

    derived_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_key_deterministic() {
        let backend = SproutBackend::new();
        let key1 = backend.raw_key("some phrase").unwrap();
        let key2 = backend.raw_key("some phrase").unwrap();
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_raw_key_known_answer() {
        // SHA-256 of the empty string.
        let backend = SproutBackend::new();
        let key = backend.raw_key("").unwrap();
        assert_eq!(
            hex::encode(key),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_prf_tags_are_independent() {
        let backend = SproutBackend::new();
        let a_sk = [0x0a; 32];
        let a_pk = backend.prf_addr_a_pk(&a_sk).unwrap();
        let sk_enc = backend.prf_addr_sk_enc(&a_sk).unwrap();
        assert_ne!(a_pk, sk_enc);

        // Interleaved calls do not disturb each other.
        assert_eq!(backend.prf_addr_a_pk(&a_sk).unwrap(), a_pk);
        assert_eq!(backend.prf_addr_sk_enc(&a_sk).unwrap(), sk_enc);
    }

    #[test]
    fn test_prf_domain_bits_ignored_in_input() {
        // The domain bits overwrite the top two bits of byte 0, so inputs
        // differing only there collide by construction. The secret key's
        // top nibble is already masked to zero upstream.
        let mut with_bits = [0x3c; 32];
        with_bits[0] |= PRF_ADDR_DOMAIN;
        assert_eq!(prf_addr(&[0x3c; 32], 0), prf_addr(&with_bits, 0));
    }

    #[test]
    fn test_scalar_mult_base_known_answer() {
        // RFC 7748 X25519 test vector (scalar times the base point).
        let backend = SproutBackend::new();
        let mut scalar = [0u8; 32];
        hex::decode_to_slice(
            "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
            &mut scalar,
        )
        .unwrap();
        let public = backend.scalar_mult_base(&scalar).unwrap();
        assert_eq!(
            hex::encode(public),
            "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a"
        );
    }
}
