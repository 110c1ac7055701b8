use crate::*;

/// Gas billed to the account: measured usage plus the configured overhead for
/// the work after measurement (the refund receipt and the submitter's
/// transaction conversion).
pub(crate) fn gas_charge(used: Gas, overhead: u64) -> Result<u64, RelayError> {
    used.as_gas()
        .checked_add(overhead)
        .ok_or_else(|| RelayError::InvalidInput("Gas charge overflow".into()))
}

/// `gas_charged * gas_price + refund_amount`.
pub(crate) fn quote_refund(
    gas_charged: u64,
    gas_price: u128,
    refund_amount: u128,
) -> Result<u128, RelayError> {
    u128::from(gas_charged)
        .checked_mul(gas_price)
        .and_then(|cost| cost.checked_add(refund_amount))
        .ok_or_else(|| RelayError::InvalidInput("Refund overflow".into()))
}
