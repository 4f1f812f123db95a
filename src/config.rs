/*
    Protocol settings that change how keys are rendered as addresses.
*/

use serde::{Deserialize, Serialize};

/// Neo N3 address version byte. Addresses encoded with it start with 'N'.
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolSettings {
    pub address_version: u8
}

impl ProtocolSettings {
    pub fn new(address_version: u8) -> Self {
        Self { address_version }
    }
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS_VERSION)
    }
}
