//! Relay execution: verify, authorize, execute, refund, commit.
//!
//! Every step before commit only reads state or mutates the staged
//! [`AccountSession`], so a rejection at any point leaves the nonce, the
//! account and the promise queue untouched.

use onsocial_relay_auth::nonce::{advance_nonce, check_nonce};
use onsocial_relay_auth::{VerifyRelay, verify_relay};
use onsocial_relay_types::RelayMessage;

use super::{gas_charge, quote_refund};
use crate::accounts::{AccountBackend, AccountSession};
use crate::events::NewOwnerCall;
use crate::*;

pub(crate) fn forward<B: AccountBackend>(
    backend: &mut B,
    config: &RelayConfig,
    method: &'static str,
    request: RelayRequest,
) -> Result<RelayOutcome, RelayError> {
    validate_request(config, &request)?;
    let RelayRequest {
        account_id,
        nonce: U64(nonce),
        payloads,
        refund_amount: U128(refund_amount),
        gas_price: U128(gas_price),
        signature,
    } = request;
    let calls: Vec<Vec<u8>> = payloads.into_iter().map(|p| p.0).collect();

    let signer = verify_relay(&VerifyRelay {
        domain_prefix: DOMAIN_PREFIX,
        message: RelayMessage {
            method,
            account_id: account_id.as_str(),
            nonce,
            calls: &calls,
            refund_amount,
            gas_price,
        },
        signature: &signature.0,
    })?;

    if !backend.is_owner_authorized(&account_id, &signer) {
        return Err(RelayError::Unauthorized(format!(
            "{signer} is not an owner device of {account_id}"
        )));
    }
    check_nonce(NONCE_PREFIX, &account_id, nonce)?;

    let mut session = backend.open_session(&account_id)?;
    execute_calls(&mut session, &calls)?;

    let gas_charged = gas_charge(env::used_gas(), config.gas_overhead.0)?;
    let refund = quote_refund(gas_charged, gas_price, refund_amount)?;
    session.charge(refund)?;

    advance_nonce(NONCE_PREFIX, &account_id, nonce)?;
    backend.commit_session(session);
    let relayer = env::predecessor_account_id();
    if refund > 0 {
        let _ = Promise::new(relayer.clone()).transfer(NearToken::from_yoctonear(refund));
    }

    let call_count = calls.len() as u32;
    events::emit_new_owner_call(&NewOwnerCall {
        account_id: &account_id,
        nonce,
        signer: &signer,
        relayer: &relayer,
        call_count,
        gas_charged,
        refund,
    });

    Ok(RelayOutcome {
        account_id,
        nonce: U64(nonce),
        signer: signer.to_string(),
        call_count,
        gas_charged: U64(gas_charged),
        refund: U128(refund),
    })
}

fn validate_request(config: &RelayConfig, request: &RelayRequest) -> Result<(), RelayError> {
    let count = request.payloads.len();
    if count == 0 || count > config.max_calls as usize {
        return Err(RelayError::InvalidInput(format!(
            "Expected 1..={} payloads, got {count}",
            config.max_calls
        )));
    }
    for (index, payload) in request.payloads.iter().enumerate() {
        if payload.0.is_empty() || payload.0.len() > config.max_payload_bytes as usize {
            return Err(RelayError::InvalidInput(format!(
                "Payload {index} must be 1..={} bytes",
                config.max_payload_bytes
            )));
        }
    }
    Ok(())
}

fn execute_calls(session: &mut AccountSession, calls: &[Vec<u8>]) -> Result<(), RelayError> {
    for (index, payload) in calls.iter().enumerate() {
        session
            .execute_payload(payload)
            .map_err(|err| RelayError::ForwardedCallFailed {
                index: index as u32,
                reason: err.to_string(),
            })?;
    }
    Ok(())
}
