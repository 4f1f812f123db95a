use crate::config::ProtocolSettings;

/// Leading version byte of a Base58Check payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
    PrivateKeyWIF,
    Address(u8),
    None
}

/// Trailing flag marking a WIF payload as belonging to a compressed public key.
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;

impl VersionPrefix {
    pub const WIF_BYTE: u8 = 0x80;

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            VersionPrefix::PrivateKeyWIF => vec![Self::WIF_BYTE],
            VersionPrefix::Address(v) => vec![*v],
            VersionPrefix::None => vec![]
        }
    }

    /**
        Address prefix for the given protocol settings
    */
    pub fn address(settings: &ProtocolSettings) -> Self {
        VersionPrefix::Address(settings.address_version)
    }

    /// Length of the prefix in bytes.
    pub fn len(&self) -> usize {
        match self {
            VersionPrefix::None => 0,
            _ => 1
        }
    }
}
