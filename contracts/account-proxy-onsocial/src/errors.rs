use near_sdk::json_types::U128;
use near_sdk_macros::NearSchema;
use onsocial_relay_types::AuthError;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum RelayError {
    InvalidSignature(String),
    Unauthorized(String),
    StaleOrFutureNonce { expected: u64, provided: u64 },
    ForwardedCallFailed { index: u32, reason: String },
    InsufficientBalanceForRefund { required: U128, available: U128 },
    InvalidInput(String),
    InvalidState(String),
    NotFound(String),
    InsufficientDeposit(String),
    ContractPaused,
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSignature(msg) => write!(f, "Invalid signature: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::StaleOrFutureNonce { expected, provided } => {
                write!(f, "Stale or future nonce: expected {}, got {}", expected, provided)
            }
            Self::ForwardedCallFailed { index, reason } => {
                write!(f, "Forwarded call {} failed: {}", index, reason)
            }
            Self::InsufficientBalanceForRefund { required, available } => write!(
                f,
                "Insufficient balance for refund: required {}, available {}",
                required.0, available.0
            ),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::ContractPaused => write!(f, "Contract is paused"),
        }
    }
}

impl From<AuthError> for RelayError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidInput(msg) => Self::InvalidInput(msg),
            AuthError::SignatureInvalid(msg) => Self::InvalidSignature(msg),
            AuthError::NonceMismatch { expected, provided } => {
                Self::StaleOrFutureNonce { expected, provided }
            }
        }
    }
}

impl RelayError {
    pub fn account_not_found(id: &near_sdk::AccountId) -> Self {
        Self::NotFound(format!("Account not registered: {}", id))
    }
    pub fn device_not_found(device: &str) -> Self {
        Self::NotFound(format!("Device not found: {}", device))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
