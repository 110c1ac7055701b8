use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), RelayError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(RelayError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn parse_device(device: &str) -> Result<DeviceAddress, RelayError> {
    device
        .parse()
        .map_err(|e: onsocial_relay_types::AuthError| RelayError::InvalidInput(e.to_string()))
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), RelayError> {
        if actor_id != &self.owner_id {
            return Err(RelayError::only_owner("contract owner"));
        }
        Ok(())
    }

    pub(crate) fn check_not_paused(&self) -> Result<(), RelayError> {
        if self.paused {
            return Err(RelayError::ContractPaused);
        }
        Ok(())
    }
}
