//! Staged execution of account calls.
//!
//! A session works on a copy of the account. Calls debit the copy and queue
//! [`Effect`]s; nothing touches storage or creates promises until the backend
//! commits the session, so dropping a session discards every staged change.

use crate::*;

/// Call an account performs, borsh-encoded as a relay payload.
///
/// Every variant settles inside the account's own ledger. Outgoing receipts
/// carry the proxy as predecessor, so no variant may invoke another contract.
#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub enum AccountCall {
    Transfer {
        receiver_id: AccountId,
        amount: u128,
    },
    AddDevice {
        device: DeviceAddress,
        role: DeviceRole,
    },
    RemoveDevice {
        device: DeviceAddress,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
    Transfer {
        receiver_id: AccountId,
        amount: u128,
    },
    DeviceAdded {
        device: DeviceAddress,
        role: DeviceRole,
    },
    DeviceRemoved {
        device: DeviceAddress,
    },
}

pub(crate) struct AccountSession {
    account_id: AccountId,
    account: SmartAccount,
    effects: Vec<Effect>,
}

impl AccountSession {
    pub(crate) fn new(account_id: AccountId, account: SmartAccount) -> Self {
        Self {
            account_id,
            account,
            effects: Vec::new(),
        }
    }

    pub(crate) fn execute_payload(&mut self, payload: &[u8]) -> Result<(), RelayError> {
        let call: AccountCall = near_sdk::borsh::from_slice(payload)
            .map_err(|_| RelayError::InvalidInput("Payload is not a valid account call".into()))?;
        self.execute(call)
    }

    pub(crate) fn execute(&mut self, call: AccountCall) -> Result<(), RelayError> {
        match call {
            AccountCall::Transfer {
                receiver_id,
                amount,
            } => {
                self.check_receiver(&receiver_id)?;
                self.debit(amount, "transfer")?;
                self.effects.push(Effect::Transfer {
                    receiver_id,
                    amount,
                });
            }
            AccountCall::AddDevice { device, role } => {
                if self.account.device(&device).is_some() {
                    return Err(RelayError::InvalidInput(format!(
                        "Device already registered: {device}"
                    )));
                }
                if self.account.devices.len() >= MAX_DEVICES_PER_ACCOUNT {
                    return Err(RelayError::InvalidState(format!(
                        "Too many devices (max {MAX_DEVICES_PER_ACCOUNT})"
                    )));
                }
                self.account.devices.push(Device {
                    address: device,
                    role,
                    added_at_ms: env::block_timestamp_ms(),
                });
                self.effects.push(Effect::DeviceAdded { device, role });
            }
            AccountCall::RemoveDevice { device } => {
                let pos = self
                    .account
                    .devices
                    .iter()
                    .position(|d| d.address == device)
                    .ok_or_else(|| RelayError::device_not_found(&device.to_string()))?;
                if self.account.devices[pos].role == DeviceRole::Owner
                    && self.account.owner_count() == 1
                {
                    return Err(RelayError::InvalidState(
                        "Cannot remove the last owner device".into(),
                    ));
                }
                self.account.devices.remove(pos);
                self.effects.push(Effect::DeviceRemoved { device });
            }
        }
        Ok(())
    }

    /// Debit the relay refund. Runs after every payload so it sees the final staged balance.
    pub(crate) fn charge(&mut self, amount: u128) -> Result<(), RelayError> {
        let available = self.account.balance;
        self.account.balance =
            available
                .checked_sub(amount)
                .ok_or(RelayError::InsufficientBalanceForRefund {
                    required: U128(amount),
                    available: U128(available),
                })?;
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (AccountId, SmartAccount, Vec<Effect>) {
        (self.account_id, self.account, self.effects)
    }

    fn debit(&mut self, amount: u128, what: &str) -> Result<(), RelayError> {
        if amount == 0 {
            return Err(RelayError::InvalidInput(format!(
                "{what} amount must be positive"
            )));
        }
        let balance = self.account.balance;
        self.account.balance = balance.checked_sub(amount).ok_or_else(|| {
            RelayError::InvalidState(format!(
                "Insufficient account balance for {what}: need {amount}, have {balance}"
            ))
        })?;
        Ok(())
    }

    fn check_receiver(&self, receiver_id: &AccountId) -> Result<(), RelayError> {
        if receiver_id == &env::current_account_id() {
            return Err(RelayError::InvalidInput(
                "Account calls cannot target the proxy contract".into(),
            ));
        }
        Ok(())
    }
}
