use near_sdk::AccountId;
use onsocial_relay_types::DeviceAddress;

use super::RELAY;
use super::builder::EventBuilder;

pub struct NewOwnerCall<'a> {
    pub account_id: &'a AccountId,
    pub nonce: u64,
    pub signer: &'a DeviceAddress,
    pub relayer: &'a AccountId,
    pub call_count: u32,
    pub gas_charged: u64,
    pub refund: u128,
}

pub fn emit_new_owner_call(call: &NewOwnerCall<'_>) {
    EventBuilder::new(RELAY, "new_owner_call", call.account_id)
        .field("account_id", call.account_id)
        .field("nonce", call.nonce)
        .field("signer", call.signer)
        .field("relayer", call.relayer)
        .field("call_count", call.call_count)
        .field("gas_charged", call.gas_charged)
        .field("refund", call.refund)
        .emit();
}
