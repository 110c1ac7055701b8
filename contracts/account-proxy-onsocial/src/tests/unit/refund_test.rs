use crate::relay::{gas_charge, quote_refund};
use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_created_receipts;
use near_sdk::testing_env;

// --- Pricing ---

#[test]
fn quote_without_refund_amount_is_gas_cost() {
    assert_eq!(quote_refund(1_000, 7, 0).unwrap(), 7_000);
}

#[test]
fn quote_adds_refund_amount() {
    assert_eq!(quote_refund(1_000, 7, 5).unwrap(), 7_005);
}

#[test]
fn quote_overflow_rejected() {
    let err = quote_refund(u64::MAX, u128::MAX, 0).unwrap_err();
    assert!(matches!(err, RelayError::InvalidInput(_)));
    let err = quote_refund(1, 1, u128::MAX).unwrap_err();
    assert!(matches!(err, RelayError::InvalidInput(_)));
}

#[test]
fn gas_charge_adds_overhead() {
    let charged = gas_charge(Gas::from_tgas(3), 5).unwrap();
    assert_eq!(charged, Gas::from_tgas(3).as_gas() + 5);
}

#[test]
fn gas_charge_overflow_rejected() {
    let err = gas_charge(Gas::from_gas(u64::MAX), 1).unwrap_err();
    assert!(matches!(err, RelayError::InvalidInput(_)));
}

// --- Relayed refunds ---

#[test]
fn zero_refund_amount_pays_exact_gas_cost() {
    let (mut contract, key) = setup();
    let before = contract.get_account_balance(user()).0;

    let outcome = relay_one(&mut contract, &key, 0, transfer(receiver(), 1_000), 0).unwrap();

    assert!(outcome.gas_charged.0 >= DEFAULT_GAS_OVERHEAD);
    assert_eq!(outcome.refund.0, outcome.gas_charged.0 as u128 * GAS_PRICE);
    assert_eq!(
        contract.get_account_balance(user()).0,
        before - 1_000 - outcome.refund.0
    );
}

#[test]
fn positive_refund_amount_pays_more_than_gas_cost() {
    let (mut contract, key) = setup();
    let extra = ONE_NEAR / 100;

    let outcome = relay_one(&mut contract, &key, 0, transfer(receiver(), 1_000), extra).unwrap();

    let gas_cost = outcome.gas_charged.0 as u128 * GAS_PRICE;
    assert_eq!(outcome.refund.0, gas_cost + extra);
    assert!(outcome.refund.0 > gas_cost);
    let event = find_event("new_owner_call").unwrap();
    assert_eq!(event["data"][0]["refund"], outcome.refund.0.to_string().as_str());
}

#[test]
fn refund_paid_to_submitter() {
    let (mut contract, key) = setup();
    relay_one(&mut contract, &key, 0, transfer(receiver(), 1_000), 0).unwrap();
    assert!(get_created_receipts().iter().any(|r| r.receiver_id == relayer()));
}

#[test]
fn zero_gas_price_and_refund_pays_nothing() {
    let (mut contract, key) = setup();
    let payloads = vec![transfer(receiver(), 1_000)];
    let signature = sign(
        &key,
        FORWARD_OWNER_CALLS_METHOD,
        &user(),
        0,
        &payloads,
        0,
        0,
    );
    testing_env!(context(relayer()).build());
    let outcome = contract
        .forward_owner_calls(RelayRequest {
            account_id: user(),
            nonce: U64(0),
            payloads,
            refund_amount: U128(0),
            gas_price: U128(0),
            signature,
        })
        .unwrap();
    assert_eq!(outcome.refund.0, 0);
    assert!(!get_created_receipts().iter().any(|r| r.receiver_id == relayer()));
}

#[test]
fn charge_is_measured_gas_plus_overhead_only() {
    let (mut contract, key) = setup();
    contract.config.gas_overhead = U64(0);
    let outcome = relay_one(&mut contract, &key, 0, transfer(receiver(), 1_000), 0).unwrap();
    // Nothing is prepaid for downstream receipts, so the charge never exceeds gas burnt so far.
    assert!(outcome.gas_charged.0 <= env::used_gas().as_gas());
    assert!(outcome.gas_charged.0 > 0);
}

#[test]
fn gas_overhead_follows_config() {
    let (mut contract, key) = setup();
    contract.config.gas_overhead = U64(0);
    let lean = relay_one(&mut contract, &key, 0, transfer(receiver(), 1), 0).unwrap();

    contract.config.gas_overhead = U64(MAX_GAS_OVERHEAD);
    let heavy = relay_one(&mut contract, &key, 1, transfer(receiver(), 1), 0).unwrap();

    assert!(lean.gas_charged.0 < MAX_GAS_OVERHEAD);
    assert!(heavy.gas_charged.0 >= MAX_GAS_OVERHEAD);
}

// --- Shortfall ---

#[test]
fn refund_exceeding_balance_rejected() {
    let (mut contract, key) = setup();
    let before = contract.get_account_balance(user()).0;

    let err = relay_one(&mut contract, &key, 0, transfer(receiver(), 1_000), 10 * ONE_NEAR)
        .unwrap_err();

    match err {
        RelayError::InsufficientBalanceForRefund {
            required,
            available,
        } => {
            assert!(required.0 > 10 * ONE_NEAR);
            // Payload debits are staged before the refund.
            assert_eq!(available.0, before - 1_000);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(contract.get_nonce(user()).0, 0);
    assert_eq!(contract.get_account_balance(user()).0, before);
    assert!(get_created_receipts().is_empty());
}
