use near_sdk::json_types::{Base64VecU8, U64, U128};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;

mod accounts;
mod config;
mod relay;
mod storage;

mod admin;
mod upgrade;


pub use accounts::{
    AccountCall, AccountRegistry, AccountView, Device, DeviceRole, DeviceView, SmartAccount,
};
pub use config::{RelayConfig, RelayConfigUpdate};
pub use constants::*;
pub use errors::RelayError;
pub use onsocial_relay_types::DeviceAddress;
pub use relay::{RelayOutcome, RelayRequest};
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub paused: bool,
    pub config: RelayConfig,

    // Relay nonces live in raw storage under NONCE_PREFIX, not in this struct.
    pub(crate) accounts: AccountRegistry,
}
