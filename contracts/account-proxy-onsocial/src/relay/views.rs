use onsocial_relay_auth::nonce::read_nonce;
use onsocial_relay_types::RelayMessage;

use crate::*;

#[near]
impl Contract {
    /// Next nonce `account_id` accepts.
    pub fn get_nonce(&self, account_id: AccountId) -> U64 {
        U64(read_nonce(NONCE_PREFIX, &account_id))
    }

    /// Exact text an owner device signs with `personal_sign` for this request.
    #[handle_result]
    pub fn relay_message(
        &self,
        method: String,
        account_id: AccountId,
        nonce: U64,
        payloads: Vec<Base64VecU8>,
        refund_amount: U128,
        gas_price: U128,
    ) -> Result<String, RelayError> {
        let method = relay_method(&method)?;
        let calls: Vec<Vec<u8>> = payloads.into_iter().map(|p| p.0).collect();
        let message = onsocial_relay_auth::relay_signing_message(
            DOMAIN_PREFIX,
            &RelayMessage {
                method,
                account_id: account_id.as_str(),
                nonce: nonce.0,
                calls: &calls,
                refund_amount: refund_amount.0,
                gas_price: gas_price.0,
            },
        );
        String::from_utf8(message)
            .map_err(|_| RelayError::InvalidInput("Relay message is not UTF-8".into()))
    }

    /// Hex keccak256 digest the relay recovers the signer from.
    #[handle_result]
    pub fn relay_digest(
        &self,
        method: String,
        account_id: AccountId,
        nonce: U64,
        payloads: Vec<Base64VecU8>,
        refund_amount: U128,
        gas_price: U128,
    ) -> Result<String, RelayError> {
        let method = relay_method(&method)?;
        let calls: Vec<Vec<u8>> = payloads.into_iter().map(|p| p.0).collect();
        let digest = onsocial_relay_auth::relay_digest(
            DOMAIN_PREFIX,
            &RelayMessage {
                method,
                account_id: account_id.as_str(),
                nonce: nonce.0,
                calls: &calls,
                refund_amount: refund_amount.0,
                gas_price: gas_price.0,
            },
        );
        Ok(hex::encode(digest))
    }
}

fn relay_method(method: &str) -> Result<&'static str, RelayError> {
    match method {
        FORWARD_OWNER_CALL_METHOD => Ok(FORWARD_OWNER_CALL_METHOD),
        FORWARD_OWNER_CALLS_METHOD => Ok(FORWARD_OWNER_CALLS_METHOD),
        other => Err(RelayError::InvalidInput(format!(
            "Unknown relay method: {other}"
        ))),
    }
}
