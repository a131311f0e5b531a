//! Error types for key derivation.

use thiserror::Error;

/// Errors that can occur while deriving the shielded key hierarchy.
///
/// The derivation pipeline is pure and deterministic, so none of these
/// conditions are retried: re-running the same input reproduces the same
/// failure. Each variant names the stage that failed. Error messages never
/// contain key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The caller-supplied phrase could not be consumed by the key
    /// derivation primitive.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A pseudorandom function rejected otherwise well-formed input.
    ///
    /// The PRF input is always exactly 32 bytes, so this indicates a broken
    /// backend rather than a runtime condition.
    #[error("PRF derivation failed: {0}")]
    Derivation(String),

    /// The scalar multiplication primitive rejected a clamped scalar.
    ///
    /// Clamping guarantees a valid scalar; treat this as a fatal backend
    /// invariant violation.
    #[error("Crypto backend failure: {0}")]
    CryptoBackend(String),

    /// Key material has the wrong length.
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
