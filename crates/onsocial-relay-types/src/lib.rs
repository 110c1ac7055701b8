//! Shared types and pure-logic utilities for the OnSocial account proxy relay.
//! Zero NEAR SDK dependency, usable on-chain and by off-chain signers.

mod address;
mod crypto;
mod error;
mod message;

pub use address::DeviceAddress;
pub use crypto::{SECP256K1_SIGNATURE_LEN, secp256k1_signature_parts};
pub use error::AuthError;
pub use message::{
    RelayMessage, build_relay_payload, build_signing_message, encode_calls, personal_message,
};
