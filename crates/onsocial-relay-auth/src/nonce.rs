//! Per-account relay nonce sequencing via NEAR storage.
//! Each contract chooses a unique `prefix` byte to avoid key collisions.

use near_sdk::{AccountId, env};
use onsocial_relay_types::AuthError;

/// Key format: `prefix | account`.
#[inline]
pub fn nonce_storage_key(prefix: u8, account: &AccountId) -> Vec<u8> {
    let account_bytes = account.as_bytes();
    let mut key = Vec::with_capacity(1 + account_bytes.len());
    key.push(prefix);
    key.extend_from_slice(account_bytes);
    key
}

/// Next nonce the account accepts, or 0 if none was ever consumed.
#[inline]
pub fn read_nonce(prefix: u8, account: &AccountId) -> u64 {
    let key = nonce_storage_key(prefix, account);
    env::storage_read(&key)
        .and_then(|bytes| bytes.try_into().ok().map(u64::from_le_bytes))
        .unwrap_or(0)
}

#[inline]
fn write_nonce(prefix: u8, account: &AccountId, nonce: u64) {
    let key = nonce_storage_key(prefix, account);
    env::storage_write(&key, &nonce.to_le_bytes());
}

/// Returns `NonceMismatch` unless `provided` is exactly the next expected value.
/// Does not write.
pub fn check_nonce(prefix: u8, account: &AccountId, provided: u64) -> Result<(), AuthError> {
    let expected = read_nonce(prefix, account);
    if provided != expected {
        return Err(AuthError::NonceMismatch { expected, provided });
    }
    Ok(())
}

/// Mark `consumed` as used. Returns new storage bytes consumed (0 if overwrite).
pub fn advance_nonce(prefix: u8, account: &AccountId, consumed: u64) -> Result<u64, AuthError> {
    let next = consumed
        .checked_add(1)
        .ok_or_else(|| AuthError::InvalidInput("nonce exhausted".into()))?;
    let before = env::storage_usage();
    write_nonce(prefix, account, next);
    Ok(env::storage_usage().saturating_sub(before))
}
