use crate::{
    config::ProtocolSettings,
    encoding::{
        base58::Base58,
        version_prefix::VersionPrefix
    },
    error::{KeyError, Result},
    hash,
    key::PubKey,
    script::VerificationScript,
    util::try_into
};
use std::fmt;
use tracing::warn;

pub const SCRIPT_HASH_SIZE: usize = 20;

/**
    Hash160 of a verification script, identifies an account.

    Bytes are kept in the order the hash function produces them.
    Neo displays script hashes byte-reversed, `Display` follows that.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptHash([u8; SCRIPT_HASH_SIZE]);

impl ScriptHash {
    pub fn from_script(script: &VerificationScript) -> Self {
        Self(hash::hash160(script.as_bytes()))
    }

    pub fn from_pub_key(pk: &PubKey) -> Self {
        Self::from_script(&VerificationScript::from_pub_key(pk))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(try_into(bytes)?))
    }

    pub fn as_bytes(&self) -> &[u8; SCRIPT_HASH_SIZE] {
        &self.0
    }

    /**
        Creates an address from the script hash.
        * Base58Check( version || script hash )
    */
    pub fn to_address(&self, settings: &ProtocolSettings) -> String {
        Base58::new(VersionPrefix::address(settings), &self.0).check_encode()
    }

    /**
        Decodes an address back into its script hash.
        Fails if the checksum, the payload length or the version byte is wrong.
    */
    pub fn from_address(address: &str, settings: &ProtocolSettings) -> Result<Self> {
        let decoded = Base58::check_decode(address).map_err(|e| {
            warn!(address, error = %e, "rejected address");
            KeyError::from(e)
        })?;

        if decoded.len() != SCRIPT_HASH_SIZE + 1 {
            return Err(KeyError::InvalidInput(format!("Address payload of {} bytes", decoded.len())))
        }
        if decoded[0] != settings.address_version {
            return Err(KeyError::InvalidInput(
                format!("Address version {:#04x}, expected {:#04x}", decoded[0], settings.address_version)
            ))
        }

        Self::from_bytes(&decoded[1..])
    }
}

impl fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

pub struct Address;

impl Address {
    /**
        Creates an address from a public key with the default settings.
    */
    pub fn from_pub_key(pk: &PubKey) -> String {
        ScriptHash::from_pub_key(pk).to_address(&ProtocolSettings::default())
    }

    /**
        Verifies that an address is valid by checking the payload, version and checksum
    */
    pub fn is_valid(address: &str, settings: &ProtocolSettings) -> bool {
        ScriptHash::from_address(address, settings).is_ok()
    }
}
