mod builder;
mod types;

mod account;
mod contract;
mod relay;

pub use account::*;
pub use contract::*;
pub use relay::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const RELAY: &str = "RELAY_UPDATE";
pub(crate) const ACCOUNT: &str = "ACCOUNT_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
