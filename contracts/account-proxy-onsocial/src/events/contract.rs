use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;
use crate::RelayConfig;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_paused(owner_id: &AccountId, paused: bool) {
    let operation = if paused { "paused" } else { "unpaused" };
    EventBuilder::new(CONTRACT, operation, owner_id)
        .field("paused", paused)
        .emit();
}

pub fn emit_config_updated(owner_id: &AccountId, config: &RelayConfig) {
    EventBuilder::new(CONTRACT, "config_updated", owner_id)
        .field("gas_overhead", config.gas_overhead.0)
        .field("max_calls", config.max_calls)
        .field("max_payload_bytes", config.max_payload_bytes)
        .emit();
}
