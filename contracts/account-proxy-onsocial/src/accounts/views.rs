use super::AccountBackend;
use crate::*;

#[near]
impl Contract {
    pub fn get_account(&self, account_id: AccountId) -> Option<AccountView> {
        self.accounts
            .get(&account_id)
            .map(|account| AccountView::new(account_id.clone(), account))
    }

    pub fn get_devices(&self, account_id: AccountId) -> Vec<DeviceView> {
        self.accounts
            .get(&account_id)
            .map(|account| account.devices.iter().map(DeviceView::from).collect())
            .unwrap_or_default()
    }

    pub fn get_account_balance(&self, account_id: AccountId) -> U128 {
        U128(self.accounts.get(&account_id).map_or(0, |a| a.balance))
    }

    /// Unparseable device strings are simply not authorized.
    pub fn is_owner_authorized(&self, account_id: AccountId, device: String) -> bool {
        device
            .parse::<DeviceAddress>()
            .is_ok_and(|device| self.accounts.is_owner_authorized(&account_id, &device))
    }
}
