use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, config: Option<RelayConfig>) -> Self {
        let config = config.unwrap_or_default();
        if let Err(err) = config.validate() {
            env::panic_str(&err.to_string());
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            paused: false,
            config,
            accounts: AccountRegistry::new(),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), RelayError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(RelayError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn pause(&mut self) -> Result<(), RelayError> {
        self.set_paused(true)
    }

    #[payable]
    #[handle_result]
    pub fn unpause(&mut self) -> Result<(), RelayError> {
        self.set_paused(false)
    }

    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, update: RelayConfigUpdate) -> Result<(), RelayError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.config.validate_patch(&update)?;
        self.config.apply_patch(&update);
        near_sdk::log!(
            "Relay config: gas_overhead={} max_calls={} max_payload_bytes={}",
            self.config.gas_overhead.0,
            self.config.max_calls,
            self.config.max_payload_bytes
        );
        events::emit_config_updated(&self.owner_id, &self.config);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn get_config(&self) -> &RelayConfig {
        &self.config
    }
}

impl Contract {
    fn set_paused(&mut self, paused: bool) -> Result<(), RelayError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if self.paused == paused {
            return Err(RelayError::InvalidState(format!(
                "Contract is already {}",
                if paused { "paused" } else { "unpaused" }
            )));
        }
        self.paused = paused;
        events::emit_paused(&self.owner_id, paused);
        Ok(())
    }
}
