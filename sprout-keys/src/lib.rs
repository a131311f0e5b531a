//! Shielded key hierarchy derivation for a Sprout-style protocol.
//!
//! This crate derives the full private-address key hierarchy from a
//! human-supplied passphrase:
//!
//! ```text
//! phrase -> a_sk -> { a_pk, sk_enc } -> clamp(sk_enc) -> pk_enc
//! ```
//!
//! - **a_sk**: root secret key, 32 bytes with the top nibble of byte 0
//!   cleared (252 effective bits)
//! - **a_pk**: paying key, derived through PRF^addr with tag 0
//! - **sk_enc / pk_enc**: transmission key pair; the scalar is derived
//!   through PRF^addr with tag 1, clamped, and multiplied against the
//!   Curve25519 base point
//!
//! Every stage is a pure, stateless function, so the whole pipeline may be
//! invoked concurrently from any number of threads. Cryptographic
//! primitives are reached through the [`CryptoBackend`] trait;
//! [`SproutBackend`] is the production instantiation.
//!
//! # Example
//!
//! ```rust
//! use sprout_keys::{derive_paying_key, derive_secret_key, derive_transmission_key, SproutBackend};
//!
//! let backend = SproutBackend::new();
//!
//! let a_sk = derive_secret_key(&backend, "correct horse battery staple")?;
//! let a_pk = derive_paying_key(&backend, &a_sk)?;
//! let pk_enc = derive_transmission_key(&backend, &a_sk)?;
//!
//! assert_eq!(a_pk.to_hex().len(), 64);
//! assert_eq!(pk_enc.to_hex().len(), 64);
//! # Ok::<(), sprout_keys::KeyError>(())
//! ```

mod backend;
mod derivation;
mod error;
mod types;

pub use backend::{CryptoBackend, SproutBackend};
pub use derivation::{
    base_point_multiply, clamp_scalar, derive_paying_key, derive_secret_key,
    derive_transmission_key, derive_transmission_scalar, CLAMP_HIGH_MASK, CLAMP_HIGH_SET,
    CLAMP_LOW_MASK,
};
pub use error::KeyError;
pub use types::{
    ClampedScalar, PayingKey, SecretKey, TransmissionKey, TransmissionScalar, SECRET_KEY_MASK,
};

#[cfg(test)]
mod tests;
