use super::{AccountBackend, AccountCall};
use crate::guards::{check_one_yocto, parse_device};
use crate::*;

#[near]
impl Contract {
    /// Register the caller as a smart account controlled by `owner_device`.
    /// The attached deposit, minus the storage reserve, becomes the account balance.
    #[payable]
    #[handle_result]
    pub fn register_account(&mut self, owner_device: String) -> Result<AccountView, RelayError> {
        self.check_not_paused()?;
        let account_id = env::predecessor_account_id();
        if account_id == env::current_account_id() {
            return Err(RelayError::InvalidInput(
                "The proxy cannot register itself".into(),
            ));
        }
        if self.accounts.contains(&account_id) {
            return Err(RelayError::InvalidState(format!(
                "Account already registered: {account_id}"
            )));
        }
        let owner_device = parse_device(&owner_device)?;
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit < MIN_REGISTRATION_DEPOSIT {
            return Err(RelayError::InsufficientDeposit(format!(
                "Registration requires at least {MIN_REGISTRATION_DEPOSIT} yoctoNEAR"
            )));
        }

        let account = SmartAccount::new(owner_device, deposit - ACCOUNT_STORAGE_RESERVE);
        let view = AccountView::new(account_id.clone(), &account);
        events::emit_account_registered(&account_id, &owner_device, account.balance);
        self.accounts.insert(account_id, account);
        Ok(view)
    }

    /// Anyone may top up a registered account.
    #[payable]
    #[handle_result]
    pub fn deposit(&mut self, account_id: AccountId) -> Result<U128, RelayError> {
        self.check_not_paused()?;
        let amount = env::attached_deposit().as_yoctonear();
        if amount == 0 {
            return Err(RelayError::InsufficientDeposit(
                "Must attach NEAR to deposit".into(),
            ));
        }
        let new_balance = self.accounts.credit(&account_id, amount)?;
        events::emit_deposit(&env::predecessor_account_id(), &account_id, amount, new_balance);
        Ok(U128(new_balance))
    }

    #[payable]
    #[handle_result]
    pub fn withdraw(&mut self, amount: U128) -> Result<(), RelayError> {
        check_one_yocto()?;
        let account_id = env::predecessor_account_id();
        self.run_account_call(
            &account_id,
            AccountCall::Transfer {
                receiver_id: account_id.clone(),
                amount: amount.0,
            },
        )
    }

    #[payable]
    #[handle_result]
    pub fn add_device(&mut self, device: String, role: DeviceRole) -> Result<(), RelayError> {
        check_one_yocto()?;
        let device = parse_device(&device)?;
        self.run_account_call(
            &env::predecessor_account_id(),
            AccountCall::AddDevice { device, role },
        )
    }

    #[payable]
    #[handle_result]
    pub fn remove_device(&mut self, device: String) -> Result<(), RelayError> {
        check_one_yocto()?;
        let device = parse_device(&device)?;
        self.run_account_call(
            &env::predecessor_account_id(),
            AccountCall::RemoveDevice { device },
        )
    }
}

impl Contract {
    /// Direct management by the account itself goes through the same staged
    /// session the relay uses.
    fn run_account_call(
        &mut self,
        account_id: &AccountId,
        call: AccountCall,
    ) -> Result<(), RelayError> {
        self.check_not_paused()?;
        let mut session = self.accounts.open_session(account_id)?;
        session.execute(call)?;
        self.accounts.commit_session(session);
        Ok(())
    }
}
