//! On-chain relay auth for the OnSocial account proxy: canonical digests,
//! secp256k1 signer recovery and per-account nonce sequencing via NEAR host functions.

mod digest;
pub mod nonce;
mod recover;

pub use digest::{device_address_from_public_key, relay_digest, relay_signing_message};
pub use recover::{VerifyRelay, recover_signer, verify_relay};
