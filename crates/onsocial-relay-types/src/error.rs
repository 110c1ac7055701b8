/// Protocol-independent relay authentication error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidInput(String),
    SignatureInvalid(String),
    NonceMismatch { expected: u64, provided: u64 },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::SignatureInvalid(msg) => write!(f, "invalid secp256k1 signature: {msg}"),
            Self::NonceMismatch { expected, provided } => {
                write!(f, "nonce mismatch: expected {expected}, got {provided}")
            }
        }
    }
}

impl std::error::Error for AuthError {}
