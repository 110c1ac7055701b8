mod forward;
mod refund;
mod types;
mod views;

pub(crate) use forward::forward;
pub(crate) use refund::{gas_charge, quote_refund};
pub use types::{RelayOutcome, RelayRequest};

use crate::*;

#[near]
impl Contract {
    /// Relay one owner-signed account call, refunding the caller from the account balance.
    #[handle_result]
    pub fn forward_owner_call(
        &mut self,
        account_id: AccountId,
        nonce: U64,
        payload: Base64VecU8,
        refund_amount: U128,
        gas_price: U128,
        signature: Base64VecU8,
    ) -> Result<RelayOutcome, RelayError> {
        self.check_not_paused()?;
        let request = RelayRequest {
            account_id,
            nonce,
            payloads: vec![payload],
            refund_amount,
            gas_price,
            signature,
        };
        forward(
            &mut self.accounts,
            &self.config,
            FORWARD_OWNER_CALL_METHOD,
            request,
        )
    }

    /// Relay an ordered batch of owner-signed account calls; all or nothing.
    #[handle_result]
    pub fn forward_owner_calls(
        &mut self,
        request: RelayRequest,
    ) -> Result<RelayOutcome, RelayError> {
        self.check_not_paused()?;
        forward(
            &mut self.accounts,
            &self.config,
            FORWARD_OWNER_CALLS_METHOD,
            request,
        )
    }
}
