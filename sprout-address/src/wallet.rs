//! Composed derivation from passphrase to encoded wallet.

use sprout_keys::{
    derive_paying_key, derive_secret_key, derive_transmission_key, CryptoBackend,
};

use crate::encoding::{encode_address, encode_spending_key};
use crate::{AddressError, NetworkParams, ShieldedWallet};

/// Derive the full shielded wallet for a passphrase: secret key, encoded
/// spending key, paying key, transmission key, and payment address.
///
/// Runs the whole pipeline in dependency order. There is no partial
/// result: either every field is produced or the first failing stage's
/// error is returned.
///
/// # Arguments
/// * `backend` - Cryptographic primitives (use
///   [`SproutBackend`](sprout_keys::SproutBackend) in production)
/// * `params` - Version-prefix bytes for the target network
/// * `phrase` - The passphrase; the empty phrase is valid and deterministic
pub fn derive_shielded_wallet<B: CryptoBackend>(
    backend: &B,
    params: &NetworkParams,
    phrase: &str,
) -> Result<ShieldedWallet, AddressError> {
    let secret_key = derive_secret_key(backend, phrase)?;
    let paying_key = derive_paying_key(backend, &secret_key)?;
    let transmission_key = derive_transmission_key(backend, &secret_key)?;

    let spending_key = encode_spending_key(params, &secret_key);
    let address = encode_address(params, &paying_key, &transmission_key);

    Ok(ShieldedWallet {
        secret_key,
        spending_key,
        paying_key,
        transmission_key,
        address,
    })
}
