//! Signing message construction for relayed owner calls.

use serde_json::{Value, json};

/// Fields an owner device signs to authorize a relayed batch.
pub struct RelayMessage<'a> {
    /// Relay entry point the signature is valid for (e.g. `forward_owner_calls`).
    pub method: &'a str,
    pub account_id: &'a str,
    pub nonce: u64,
    /// Opaque account calls, in execution order.
    pub calls: &'a [Vec<u8>],
    pub refund_amount: u128,
    pub gas_price: u128,
}

/// Concatenate calls in order, each prefixed by its `u32` little-endian length,
/// so the encoding commits to call boundaries and not only to the joined bytes.
pub fn encode_calls(calls: &[Vec<u8>]) -> Vec<u8> {
    let total: usize = calls.iter().map(|c| 4 + c.len()).sum();
    let mut out = Vec::with_capacity(total);
    for call in calls {
        out.extend_from_slice(&(call.len() as u32).to_le_bytes());
        out.extend_from_slice(call);
    }
    out
}

/// Build the payload JSON with canonical key order.
/// Requires `serde_json` `preserve_order` feature for deterministic field order.
pub fn build_relay_payload(message: &RelayMessage<'_>) -> Value {
    json!({
        "method": message.method,
        "call_count": message.calls.len(),
        "account_id": message.account_id,
        "nonce": message.nonce.to_string(),
        "calls": hex::encode(encode_calls(message.calls)),
        "refund_amount": message.refund_amount.to_string(),
        "gas_price": message.gas_price.to_string(),
    })
}

/// Format: `{domain_prefix}:{contract_id}\0{payload_json}`.
pub fn build_signing_message(domain_prefix: &str, contract_id: &str, payload: &Value) -> Vec<u8> {
    let domain = format!("{domain_prefix}:{contract_id}");
    let payload_bytes =
        serde_json::to_vec(payload).expect("JSON serialization cannot fail for valid Value");
    let mut message = domain.into_bytes();
    message.reserve_exact(1 + payload_bytes.len());
    message.push(0);
    message.extend_from_slice(&payload_bytes);
    message
}

/// EIP-191 personal message envelope; hashing it with keccak256 yields the
/// digest `personal_sign` wallets produce for `message`.
pub fn personal_message(message: &[u8]) -> Vec<u8> {
    let prefix = format!("\x19Ethereum Signed Message:\n{}", message.len());
    let mut out = Vec::with_capacity(prefix.len() + message.len());
    out.extend_from_slice(prefix.as_bytes());
    out.extend_from_slice(message);
    out
}
