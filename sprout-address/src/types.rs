//! Network parameters and address types.

use serde::{Deserialize, Serialize};
use sprout_keys::{PayingKey, SecretKey, TransmissionKey};

/// Network type for shielded addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// Production network.
    Mainnet,
    /// Test network.
    Testnet,
}

impl Network {
    /// Get the version-prefix parameters for this network.
    pub fn params(&self) -> NetworkParams {
        match self {
            Network::Mainnet => NetworkParams::MAINNET,
            Network::Testnet => NetworkParams::TESTNET,
        }
    }
}

/// Version-prefix bytes identifying the network and key type.
///
/// The encoder takes these as explicit configuration rather than reading
/// ambient globals, so a single binary can serve multiple networks. The
/// prefixes are protocol constants, not computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Leading bytes of an encoded spending key.
    pub spending_key_prefix: [u8; 2],
    /// Leading bytes of an encoded payment address.
    pub payment_address_prefix: [u8; 2],
}

impl NetworkParams {
    /// Mainnet magics: spending keys encode as `SK...`, addresses as `zc...`.
    pub const MAINNET: NetworkParams = NetworkParams {
        spending_key_prefix: [0xab, 0x36],
        payment_address_prefix: [0x16, 0x9a],
    };

    /// Testnet magics: spending keys encode as `ST...`, addresses as `zt...`.
    pub const TESTNET: NetworkParams = NetworkParams {
        spending_key_prefix: [0xac, 0x08],
        payment_address_prefix: [0x16, 0xb6],
    };

    /// Create parameters for a custom network.
    pub const fn new(spending_key_prefix: [u8; 2], payment_address_prefix: [u8; 2]) -> Self {
        Self {
            spending_key_prefix,
            payment_address_prefix,
        }
    }
}

/// The complete key hierarchy derived from a single passphrase, together
/// with its encoded spending-key and payment-address strings.
pub struct ShieldedWallet {
    /// Root secret key (a_sk).
    pub secret_key: SecretKey,
    /// Checksummed, versioned spending-key string.
    pub spending_key: String,
    /// Paying key (a_pk).
    pub paying_key: PayingKey,
    /// Transmission public key (pk_enc).
    pub transmission_key: TransmissionKey,
    /// Checksummed, versioned payment-address string.
    pub address: String,
}

impl std::fmt::Debug for ShieldedWallet {
    // Secret-bearing fields are omitted; the spending key string encodes
    // a_sk and must not reach logs either.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShieldedWallet")
            .field("paying_key", &self.paying_key)
            .field("transmission_key", &self.transmission_key)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
