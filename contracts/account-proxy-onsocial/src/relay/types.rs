use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct RelayRequest {
    pub account_id: AccountId,
    pub nonce: U64,
    /// Borsh-encoded `AccountCall`s, executed in order.
    pub payloads: Vec<Base64VecU8>,
    pub refund_amount: U128,
    /// yoctoNEAR per gas unit the submitter is reimbursed at.
    pub gas_price: U128,
    /// 65-byte secp256k1 `r || s || v` over the relay digest.
    pub signature: Base64VecU8,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RelayOutcome {
    pub account_id: AccountId,
    pub nonce: U64,
    pub signer: String,
    pub call_count: u32,
    pub gas_charged: U64,
    pub refund: U128,
}
