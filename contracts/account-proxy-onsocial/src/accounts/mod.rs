mod manage;
mod session;
mod types;
mod views;

pub use session::AccountCall;
pub(crate) use session::{AccountSession, Effect};
pub use types::{AccountView, Device, DeviceRole, DeviceView, SmartAccount};

use crate::*;
use near_sdk::store::LookupMap;

/// What the relay needs from the accounts it serves.
pub(crate) trait AccountBackend {
    /// Must reflect current state; the relay asks on every invocation.
    fn is_owner_authorized(&self, account_id: &AccountId, signer: &DeviceAddress) -> bool;

    fn open_session(&self, account_id: &AccountId) -> Result<AccountSession, RelayError>;

    /// Persist the staged account and dispatch its queued effects.
    fn commit_session(&mut self, session: AccountSession);
}

#[near(serializers = [borsh])]
pub struct AccountRegistry {
    entries: LookupMap<AccountId, SmartAccount>,
}

impl AccountRegistry {
    pub(crate) fn new() -> Self {
        Self {
            entries: LookupMap::new(StorageKey::Accounts),
        }
    }

    pub(crate) fn get(&self, account_id: &AccountId) -> Option<&SmartAccount> {
        self.entries.get(account_id)
    }

    pub(crate) fn contains(&self, account_id: &AccountId) -> bool {
        self.entries.contains_key(account_id)
    }

    pub(crate) fn insert(&mut self, account_id: AccountId, account: SmartAccount) {
        self.entries.insert(account_id, account);
    }

    pub(crate) fn credit(&mut self, account_id: &AccountId, amount: u128) -> Result<u128, RelayError> {
        let account = self
            .entries
            .get_mut(account_id)
            .ok_or_else(|| RelayError::account_not_found(account_id))?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| RelayError::InvalidInput("Balance overflow".into()))?;
        Ok(account.balance)
    }
}

impl AccountBackend for AccountRegistry {
    fn is_owner_authorized(&self, account_id: &AccountId, signer: &DeviceAddress) -> bool {
        self.get(account_id)
            .is_some_and(|account| account.is_owner(signer))
    }

    fn open_session(&self, account_id: &AccountId) -> Result<AccountSession, RelayError> {
        let account = self
            .get(account_id)
            .ok_or_else(|| RelayError::account_not_found(account_id))?;
        Ok(AccountSession::new(account_id.clone(), account.clone()))
    }

    fn commit_session(&mut self, session: AccountSession) {
        let (account_id, account, effects) = session.into_parts();
        self.entries.insert(account_id.clone(), account);
        for effect in effects {
            dispatch(&account_id, effect);
        }
    }
}

fn dispatch(account_id: &AccountId, effect: Effect) {
    match effect {
        Effect::Transfer {
            receiver_id,
            amount,
        } => {
            events::emit_transfer(account_id, &receiver_id, amount);
            let _ = Promise::new(receiver_id).transfer(NearToken::from_yoctonear(amount));
        }
        Effect::DeviceAdded { device, role } => {
            events::emit_device_added(account_id, &device, role);
        }
        Effect::DeviceRemoved { device } => {
            events::emit_device_removed(account_id, &device);
        }
    }
}
