//! Secp256k1 signature byte helpers.

use crate::AuthError;

/// `r || s || v`.
pub const SECP256K1_SIGNATURE_LEN: usize = 65;

/// Split a 65-byte recoverable signature into `(r || s, recovery_id)`.
///
/// Accepts the raw recovery id (`0`/`1`) as well as the Ethereum-style
/// `27`/`28` encoding produced by wallets.
pub fn secp256k1_signature_parts(signature: &[u8]) -> Result<([u8; 64], u8), AuthError> {
    if signature.len() != SECP256K1_SIGNATURE_LEN {
        return Err(AuthError::SignatureInvalid(format!(
            "expected {SECP256K1_SIGNATURE_LEN} bytes, got {}",
            signature.len()
        )));
    }
    let (rs, v) = signature.split_at(64);
    let recovery_id = match v[0] {
        0 | 1 => v[0],
        27 | 28 => v[0] - 27,
        other => {
            return Err(AuthError::SignatureInvalid(format!(
                "unsupported recovery id {other}"
            )));
        }
    };
    let rs: [u8; 64] = rs
        .try_into()
        .map_err(|_| AuthError::SignatureInvalid("malformed r || s".into()))?;
    Ok((rs, recovery_id))
}
