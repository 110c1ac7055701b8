//! Secp256k1 signer recovery using NEAR host functions.

use near_sdk::env;
use onsocial_relay_types::{AuthError, DeviceAddress, RelayMessage};

use crate::digest::{device_address_from_public_key, relay_digest};

pub struct VerifyRelay<'a> {
    pub domain_prefix: &'a str,
    pub message: RelayMessage<'a>,
    pub signature: &'a [u8],
}

/// Recover the device that signed `digest`.
/// High-s (malleable) signatures are rejected by the host.
pub fn recover_signer(digest: &[u8; 32], signature: &[u8]) -> Result<DeviceAddress, AuthError> {
    let (rs, recovery_id) = onsocial_relay_types::secp256k1_signature_parts(signature)?;
    let public_key = env::ecrecover(digest, &rs, recovery_id, true)
        .ok_or_else(|| AuthError::SignatureInvalid("signer recovery failed".into()))?;
    Ok(device_address_from_public_key(&public_key))
}

/// Recompute the relay digest for `params.message` and recover its signer.
pub fn verify_relay(params: &VerifyRelay<'_>) -> Result<DeviceAddress, AuthError> {
    let digest = relay_digest(params.domain_prefix, &params.message);
    recover_signer(&digest, params.signature)
}
