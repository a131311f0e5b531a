//! Error types for address encoding.

use thiserror::Error;

use sprout_keys::KeyError;

/// Errors that can occur during address encoding operations.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The encoded string is not valid Base58.
    #[error("Invalid Base58 encoding: {0}")]
    InvalidBase58(String),

    /// The payload checksum does not match.
    #[error("Invalid checksum")]
    InvalidChecksum,

    /// The payload has an invalid length.
    #[error("Invalid payload length: expected at least {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A key derivation stage failed.
    #[error("Key derivation failed: {0}")]
    Key(#[from] KeyError),
}
