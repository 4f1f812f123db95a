use thiserror::Error;
use zeroize::Zeroizing;

use crate::{
    bs58,
    encoding::version_prefix::VersionPrefix,
    hash
};

const CHECKSUM_LEN: usize = 4;

/// Prefix and payload waiting to be Base58 encoded.
/// The payload may be key material so it is wiped on drop.
pub struct Base58 {
    prefix: VersionPrefix,
    payload: Zeroizing<Vec<u8>>
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    #[error("invalid base58 character {0:?} at index {1}")]
    BadChar(char, usize),
    #[error("non-ascii character at index {0}")]
    NonAsciiChar(usize),
    #[error("decoded data too short for a checksum ({0} bytes)")]
    TooShort(usize),
    #[error("checksum mismatch")]
    BadChecksum,
    #[error("{0}")]
    Unknown(String)
}

impl From<bs58::decode::Error> for Base58Error {
    fn from(e: bs58::decode::Error) -> Self {
        match e {
            bs58::decode::Error::InvalidCharacter { character, index } => Base58Error::BadChar(character, index),
            bs58::decode::Error::NonAsciiCharacter { index } => Base58Error::NonAsciiChar(index),
            x => Base58Error::Unknown(x.to_string())
        }
    }
}

impl Base58 {
    pub fn new(prefix: VersionPrefix, payload: &[u8]) -> Base58 {
        Base58 {
            prefix,
            payload: Zeroizing::new(payload.to_vec())
        }
    }

    /// Concatenate prefix | payload into a buffer that is wiped on drop.
    fn prefixed(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(Vec::with_capacity(self.prefix.len() + self.payload.len() + CHECKSUM_LEN));
        bytes.extend_from_slice(&self.prefix.to_bytes());
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Check encode data by appending the checksum and then encoding it.
    pub fn check_encode(&self) -> String {
        let mut bytes = self.prefixed();
        let checksum = hash::sha256d(&bytes[..]);
        bytes.extend_from_slice(&checksum[..CHECKSUM_LEN]);

        bs58::encode(&bytes[..]).into_string()
    }

    /// Encode data in base58 format, no checksum.
    pub fn encode(&self) -> String {
        bs58::encode(&self.prefixed()[..]).into_string()
    }

    /// Decodes a base58 string into a byte vector.
    /// DOES NOT remove the checksum or version prefix if present.
    pub fn decode(encoded: &str) -> Result<Zeroizing<Vec<u8>>, Base58Error> {
        Ok(Zeroizing::new(bs58::decode(encoded).into_vec()?))
    }

    /// Checks if a base58 check encoded string is valid
    pub fn validate_checksum(encoded: &str) -> Result<bool, Base58Error> {
        let bytes = Base58::decode(encoded)?;
        Self::checksum_matches(&bytes)
    }

    fn checksum_matches(bytes: &[u8]) -> Result<bool, Base58Error> {
        if bytes.len() < CHECKSUM_LEN { return Err(Base58Error::TooShort(bytes.len())) }

        let split = bytes.len() - CHECKSUM_LEN;
        Ok(hash::sha256d(&bytes[..split])[..CHECKSUM_LEN] == bytes[split..])
    }

    /// Returns the decoded payload with the checksum removed.
    /// Version prefix is NOT removed, callers check it against what they expect.
    pub fn check_decode(encoded: &str) -> Result<Zeroizing<Vec<u8>>, Base58Error> {
        let mut bytes = Base58::decode(encoded)?;
        if !Self::checksum_matches(&bytes)? { return Err(Base58Error::BadChecksum) }

        let split = bytes.len() - CHECKSUM_LEN;
        bytes.truncate(split);
        Ok(bytes)
    }
}
