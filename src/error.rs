/*
    Error types shared by every module of the crate.
*/

use thiserror::Error;

use crate::encoding::base58::Base58Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Private scalar out of range, wrong key length or malformed key encoding.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Digest, signature or script that does not have the expected shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Checksum or Base58 composition failed.
    #[error("encoding error: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, KeyError>;

impl From<Base58Error> for KeyError {
    fn from(e: Base58Error) -> Self {
        KeyError::Encoding(e.to_string())
    }
}
