use near_sdk::AccountId;
use onsocial_relay_types::DeviceAddress;

use super::ACCOUNT;
use super::builder::EventBuilder;
use crate::DeviceRole;

pub fn emit_account_registered(account_id: &AccountId, owner_device: &DeviceAddress, balance: u128) {
    EventBuilder::new(ACCOUNT, "account_registered", account_id)
        .field("owner_device", owner_device)
        .field("balance", balance)
        .emit();
}

pub fn emit_deposit(sender_id: &AccountId, account_id: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(ACCOUNT, "deposit", sender_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_transfer(account_id: &AccountId, receiver_id: &AccountId, amount: u128) {
    EventBuilder::new(ACCOUNT, "transfer", account_id)
        .field("receiver_id", receiver_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_device_added(account_id: &AccountId, device: &DeviceAddress, role: DeviceRole) {
    EventBuilder::new(ACCOUNT, "device_added", account_id)
        .field("device", device)
        .field("role", role.as_str())
        .emit();
}

pub fn emit_device_removed(account_id: &AccountId, device: &DeviceAddress) {
    EventBuilder::new(ACCOUNT, "device_removed", account_id)
        .field("device", device)
        .emit();
}
