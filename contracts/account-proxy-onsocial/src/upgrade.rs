use semver::Version;

use crate::constants::GAS_MIGRATE_TGAS;
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Deploy the wasm passed as raw input and run `migrate` in the same batch,
    /// so a rejected migration also reverts the deploy. Owner only.
    #[handle_result]
    pub fn update_contract(&self) -> Result<Promise, RelayError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| RelayError::InvalidInput("Missing contract code".into()))?;
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    #[handle_result]
    pub fn migrate() -> Result<Self, RelayError> {
        let contract: Self = env::state_read()
            .ok_or_else(|| RelayError::InvalidState("No contract state to migrate".into()))?;
        contract.migrated()
    }
}

impl Contract {
    /// Carry stored state over to this code version.
    ///
    /// Refuses downgrades and configs that the current limits reject; the
    /// account registry and raw nonce entries keep their storage keys.
    pub(crate) fn migrated(mut self) -> Result<Self, RelayError> {
        let stored = parse_version(&self.version)?;
        let latest = parse_version(env!("CARGO_PKG_VERSION"))?;
        if stored > latest {
            return Err(RelayError::InvalidState(format!(
                "Cannot migrate from {stored} down to {latest}"
            )));
        }
        self.config
            .validate()
            .map_err(|e| RelayError::InvalidState(format!("Stored config rejected: {e}")))?;

        if stored < latest {
            let old_version = std::mem::replace(&mut self.version, latest.to_string());
            near_sdk::log!("Migrated from {} to {}", old_version, self.version);
            events::emit_contract_upgraded(
                &env::current_account_id(),
                &old_version,
                &self.version,
            );
        }
        Ok(self)
    }
}

fn parse_version(version: &str) -> Result<Version, RelayError> {
    Version::parse(version)
        .map_err(|e| RelayError::InvalidState(format!("Bad contract version {version}: {e}")))
}
