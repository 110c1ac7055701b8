use near_sdk::NearToken;

pub const DOMAIN_PREFIX: &str = "onsocial:account_proxy:v1";
// Storage key invariant: raw nonce keys must not collide with BorshStorageKey prefixes (0..n).
pub const NONCE_PREFIX: u8 = 0x07;

pub const FORWARD_OWNER_CALL_METHOD: &str = "forward_owner_call";
pub const FORWARD_OWNER_CALLS_METHOD: &str = "forward_owner_calls";

pub const DEFAULT_GAS_OVERHEAD: u64 = 5_000_000_000_000; // 5 Tgas
pub const MAX_GAS_OVERHEAD: u64 = 50_000_000_000_000;
pub const DEFAULT_MAX_CALLS: u32 = 8;
pub const MAX_CALLS_LIMIT: u32 = 32;
pub const DEFAULT_MAX_PAYLOAD_BYTES: u32 = 4_096;
pub const MAX_PAYLOAD_BYTES_LIMIT: u32 = 65_536;

pub const MAX_DEVICES_PER_ACCOUNT: usize = 10;

pub const MIN_REGISTRATION_DEPOSIT: u128 = 50_000_000_000_000_000_000_000; // 0.05 NEAR
// Storage invariant: held back from the balance to pay for the account record, up to
// MAX_DEVICES_PER_ACCOUNT devices and the account's nonce entry. Relays never charge storage.
pub const ACCOUNT_STORAGE_RESERVE: u128 = 10_000_000_000_000_000_000_000; // 0.01 NEAR

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
pub const GAS_MIGRATE_TGAS: u64 = 100;
