use near_sdk::AccountId;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::{Map, Value};

use super::{STANDARD, VERSION};

/// NEP-297 envelope. The proxy logs one operation per line, so `data` has exactly one entry.
#[derive(Serialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event<'a> {
    standard: &'static str,
    version: &'static str,
    event: &'static str,
    data: [EventData<'a>; 1],
}

#[derive(Serialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct EventData<'a> {
    operation: &'static str,
    author: &'a AccountId,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl<'a> Event<'a> {
    pub(crate) fn new(
        event: &'static str,
        operation: &'static str,
        author: &'a AccountId,
        fields: Map<String, Value>,
    ) -> Self {
        Self {
            standard: STANDARD,
            version: VERSION,
            event,
            data: [EventData {
                operation,
                author,
                fields,
            }],
        }
    }
}
