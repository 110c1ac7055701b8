//! Canonical relay digest using NEAR host hashing.

use near_sdk::env;
use onsocial_relay_types::{DeviceAddress, RelayMessage};

/// Message bytes an owner device signs with `personal_sign`.
/// Uses `env::current_account_id()` for domain separation (cross-contract replay prevention).
pub fn relay_signing_message(domain_prefix: &str, message: &RelayMessage<'_>) -> Vec<u8> {
    let payload = onsocial_relay_types::build_relay_payload(message);
    let contract_id = env::current_account_id();
    onsocial_relay_types::build_signing_message(domain_prefix, contract_id.as_str(), &payload)
}

/// keccak256 of the EIP-191 envelope around [`relay_signing_message`].
pub fn relay_digest(domain_prefix: &str, message: &RelayMessage<'_>) -> [u8; 32] {
    let signing_message = relay_signing_message(domain_prefix, message);
    env::keccak256_array(&onsocial_relay_types::personal_message(&signing_message))
}

/// `public_key` is the 64-byte uncompressed secp256k1 key without the `0x04` tag,
/// the same shape `env::ecrecover` returns.
pub fn device_address_from_public_key(public_key: &[u8; 64]) -> DeviceAddress {
    DeviceAddress::from_public_key_hash(&env::keccak256_array(public_key))
}
