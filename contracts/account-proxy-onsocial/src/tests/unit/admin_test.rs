use crate::guards::check_one_yocto;
use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Init ---

#[test]
fn new_uses_default_config() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), &owner());
    assert_eq!(contract.get_config(), &RelayConfig::default());
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
    assert!(!contract.is_paused());
}

#[test]
#[should_panic(expected = "max_calls")]
fn new_rejects_invalid_config() {
    testing_env!(context(owner()).build());
    Contract::new(
        owner(),
        Some(RelayConfig {
            max_calls: 0,
            ..RelayConfig::default()
        }),
    );
}

// --- check_one_yocto ---

#[test]
fn check_one_yocto_exact() {
    testing_env!(context_with_deposit(owner(), 1).build());
    assert!(check_one_yocto().is_ok());
}

#[test]
fn check_one_yocto_too_much_fails() {
    testing_env!(context_with_deposit(owner(), 2).build());
    let err = check_one_yocto().unwrap_err();
    assert!(matches!(err, RelayError::InsufficientDeposit(_)));
}

// --- Ownership ---

#[test]
fn transfer_ownership_happy() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(relayer()).unwrap();
    assert_eq!(contract.get_owner(), &relayer());
    let event = find_event("owner_transferred").unwrap();
    assert_eq!(event["data"][0]["new_owner"], relayer().as_str());
}

#[test]
fn transfer_ownership_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(user(), 1).build());
    let err = contract.transfer_ownership(user()).unwrap_err();
    assert!(matches!(err, RelayError::Unauthorized(_)));
}

#[test]
fn transfer_ownership_to_self_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, RelayError::InvalidInput(_)));
}

// --- Pause ---

#[test]
fn pause_blocks_relay_and_account_mutations() {
    let (mut contract, key) = setup();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.pause().unwrap();
    assert!(contract.is_paused());
    assert!(find_event("paused").is_some());

    let err = relay_one(&mut contract, &key, 0, transfer(receiver(), 1), 0).unwrap_err();
    assert_eq!(err, RelayError::ContractPaused);

    testing_env!(context_with_deposit(user(), 1).build());
    assert_eq!(
        contract.withdraw(U128(1)).unwrap_err(),
        RelayError::ContractPaused
    );
    testing_env!(context_with_deposit(relayer(), ONE_NEAR).build());
    assert_eq!(
        contract.deposit(user()).unwrap_err(),
        RelayError::ContractPaused
    );

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.unpause().unwrap();
    relay_one(&mut contract, &key, 0, transfer(receiver(), 1), 0).unwrap();
}

#[test]
fn pause_twice_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.pause().unwrap();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.pause().unwrap_err();
    assert!(matches!(err, RelayError::InvalidState(_)));
}

#[test]
fn pause_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(user(), 1).build());
    let err = contract.pause().unwrap_err();
    assert!(matches!(err, RelayError::Unauthorized(_)));
}

// --- Config ---

#[test]
fn update_config_happy() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(RelayConfigUpdate {
            gas_overhead: Some(U64(MAX_GAS_OVERHEAD)),
            max_calls: Some(MAX_CALLS_LIMIT),
            ..Default::default()
        })
        .unwrap();
    let config = contract.get_config();
    assert_eq!(config.gas_overhead.0, MAX_GAS_OVERHEAD);
    assert_eq!(config.max_calls, MAX_CALLS_LIMIT);
    assert_eq!(config.max_payload_bytes, DEFAULT_MAX_PAYLOAD_BYTES);
    assert!(find_event("config_updated").is_some());
}

#[test]
fn update_config_out_of_bounds_fails() {
    let mut contract = new_contract();
    for update in [
        RelayConfigUpdate {
            gas_overhead: Some(U64(MAX_GAS_OVERHEAD + 1)),
            ..Default::default()
        },
        RelayConfigUpdate {
            max_calls: Some(MAX_CALLS_LIMIT + 1),
            ..Default::default()
        },
        RelayConfigUpdate {
            max_payload_bytes: Some(0),
            ..Default::default()
        },
    ] {
        testing_env!(context_with_deposit(owner(), 1).build());
        let err = contract.update_config(update).unwrap_err();
        assert!(matches!(err, RelayError::InvalidInput(_)));
    }
    assert_eq!(contract.get_config(), &RelayConfig::default());
}

#[test]
fn update_config_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(user(), 1).build());
    let err = contract
        .update_config(RelayConfigUpdate::default())
        .unwrap_err();
    assert!(matches!(err, RelayError::Unauthorized(_)));
}

#[test]
fn lowered_max_calls_applies_to_relay() {
    let (mut contract, key) = setup();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(RelayConfigUpdate {
            max_calls: Some(1),
            ..Default::default()
        })
        .unwrap();

    let request = signed_request(
        &key,
        &user(),
        0,
        vec![transfer(receiver(), 1), transfer(receiver(), 1)],
        0,
    );
    testing_env!(context(relayer()).build());
    let err = contract.forward_owner_calls(request).unwrap_err();
    assert!(matches!(err, RelayError::InvalidInput(_)));
}
