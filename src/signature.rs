/*
    ECDSA signature over secp256r1 as an (r, s) pair.

    Signatures are kept exactly as the signer produced them.
    There is no low-s normalisation: both roots are valid for Neo
    and verifiers downstream see the signer's choice.
*/

use crate::{
    Curve,
    NistP256,
    U256,
    Encoding,
    error::{KeyError, Result}
};

pub const SIGNATURE_SIZE: usize = 64;
const COMPONENT_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaSignature {
    r: U256,
    s: U256
}

impl EcdsaSignature {
    /**
        Builds a signature from its components.
        Both must lie in [1, n) where n is the curve order.
    */
    pub fn new(r: U256, s: U256) -> Result<Self> {
        for (name, v) in [("r", &r), ("s", &s)].iter() {
            if **v == U256::ZERO || **v >= NistP256::ORDER {
                return Err(KeyError::InvalidInput(format!("signature component {} out of range", name)))
            }
        }
        Ok(Self { r, s })
    }

    pub fn r(&self) -> U256 {
        self.r
    }

    pub fn s(&self) -> U256 {
        self.s
    }

    /**
        Fixed width encoding: r in bytes [0, 32), s in bytes [32, 64),
        each big-endian and left padded with zeroes.
    */
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[..COMPONENT_SIZE].copy_from_slice(&self.r.to_be_bytes());
        bytes[COMPONENT_SIZE..].copy_from_slice(&self.s.to_be_bytes());
        bytes
    }

    /// Parses the fixed width r || s encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(KeyError::InvalidInput(
                format!("Expected {} signature bytes, found {}", SIGNATURE_SIZE, bytes.len())
            ))
        }
        Self::new(
            U256::from_be_slice(&bytes[..COMPONENT_SIZE]),
            U256::from_be_slice(&bytes[COMPONENT_SIZE..])
        )
    }

    /// True when s is in the upper half of the curve order.
    pub fn is_high_s(&self) -> bool {
        self.s > NistP256::ORDER.shr_vartime(1)
    }
}
