use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    /// Gas added to the measured usage of every relayed invocation before pricing the refund.
    pub gas_overhead: U64,
    pub max_calls: u32,
    pub max_payload_bytes: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            gas_overhead: U64(DEFAULT_GAS_OVERHEAD),
            max_calls: DEFAULT_MAX_CALLS,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

impl RelayConfig {
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.gas_overhead.0 > MAX_GAS_OVERHEAD {
            return Err(RelayError::InvalidInput(format!(
                "gas_overhead must be <= {MAX_GAS_OVERHEAD}"
            )));
        }
        if !(1..=MAX_CALLS_LIMIT).contains(&self.max_calls) {
            return Err(RelayError::InvalidInput(format!(
                "max_calls must be 1..={MAX_CALLS_LIMIT}"
            )));
        }
        if !(1..=MAX_PAYLOAD_BYTES_LIMIT).contains(&self.max_payload_bytes) {
            return Err(RelayError::InvalidInput(format!(
                "max_payload_bytes must be 1..={MAX_PAYLOAD_BYTES_LIMIT}"
            )));
        }
        Ok(())
    }

    pub fn validate_patch(&self, patch: &RelayConfigUpdate) -> Result<(), RelayError> {
        let mut candidate = self.clone();
        candidate.apply_patch(patch);
        candidate.validate()
    }

    pub fn apply_patch(&mut self, patch: &RelayConfigUpdate) {
        if let Some(v) = patch.gas_overhead {
            self.gas_overhead = v;
        }
        if let Some(v) = patch.max_calls {
            self.max_calls = v;
        }
        if let Some(v) = patch.max_payload_bytes {
            self.max_payload_bytes = v;
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct RelayConfigUpdate {
    pub gas_overhead: Option<U64>,
    pub max_calls: Option<u32>,
    pub max_payload_bytes: Option<u32>,
}
