use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeviceRole {
    /// May authorize relayed calls.
    Owner,
    /// Recognized by the account but never accepted by the relay.
    Delegate,
}

impl DeviceRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Delegate => "delegate",
        }
    }
}

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct Device {
    pub address: DeviceAddress,
    pub role: DeviceRole,
    pub added_at_ms: u64,
}

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct SmartAccount {
    pub balance: u128,
    pub devices: Vec<Device>,
    pub created_at_ms: u64,
}

impl SmartAccount {
    pub fn new(owner_device: DeviceAddress, balance: u128) -> Self {
        let now_ms = env::block_timestamp_ms();
        Self {
            balance,
            devices: vec![Device {
                address: owner_device,
                role: DeviceRole::Owner,
                added_at_ms: now_ms,
            }],
            created_at_ms: now_ms,
        }
    }

    pub fn device(&self, address: &DeviceAddress) -> Option<&Device> {
        self.devices.iter().find(|d| &d.address == address)
    }

    pub fn is_owner(&self, address: &DeviceAddress) -> bool {
        self.device(address)
            .is_some_and(|d| d.role == DeviceRole::Owner)
    }

    pub fn owner_count(&self) -> usize {
        self.devices
            .iter()
            .filter(|d| d.role == DeviceRole::Owner)
            .count()
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceView {
    pub address: String,
    pub role: DeviceRole,
    pub added_at_ms: u64,
}

impl From<&Device> for DeviceView {
    fn from(device: &Device) -> Self {
        Self {
            address: device.address.to_string(),
            role: device.role,
            added_at_ms: device.added_at_ms,
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct AccountView {
    pub account_id: AccountId,
    pub balance: U128,
    pub devices: Vec<DeviceView>,
    pub created_at_ms: u64,
}

impl AccountView {
    pub fn new(account_id: AccountId, account: &SmartAccount) -> Self {
        Self {
            account_id,
            balance: U128(account.balance),
            devices: account.devices.iter().map(DeviceView::from).collect(),
            created_at_ms: account.created_at_ms,
        }
    }
}
