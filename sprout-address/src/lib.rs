//! Checksummed base-58 encoding for Sprout-style shielded keys and
//! addresses.
//!
//! This crate turns the key material derived by `sprout-keys` into the two
//! human-copyable string formats:
//!
//! - **Spending key**: `base58(prefix ‖ a_sk ‖ checksum)`
//! - **Payment address**: `base58(prefix ‖ a_pk ‖ pk_enc ‖ checksum)`
//!
//! The checksum is the first four bytes of a double SHA-256 over the
//! prefixed payload. Version-prefix bytes are injected through
//! [`NetworkParams`] rather than read from globals, so mainnet, testnet,
//! or a custom network are all one configuration value away.
//!
//! Only the construction direction is provided; this crate never parses
//! attacker-supplied address strings.
//!
//! # Example
//!
//! ```rust
//! use sprout_address::{derive_shielded_wallet, NetworkParams};
//! use sprout_keys::SproutBackend;
//!
//! let backend = SproutBackend::new();
//! let wallet = derive_shielded_wallet(&backend, &NetworkParams::MAINNET, "my passphrase")?;
//!
//! assert!(wallet.spending_key.starts_with("SK"));
//! assert!(wallet.address.starts_with("zc"));
//! # Ok::<(), sprout_address::AddressError>(())
//! ```

mod encoding;
mod error;
mod types;
mod wallet;

pub use encoding::{encode_address, encode_spending_key};
pub use error::AddressError;
pub use types::{Network, NetworkParams, ShieldedWallet};
pub use wallet::derive_shielded_wallet;
