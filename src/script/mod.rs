/*
    Single signature verification scripts.

    PUSHDATA1 0x21 <33 byte compressed public key> SYSCALL System.Crypto.CheckSig
*/

pub mod builder;

pub use builder::{Builder as ScriptBuilder, Opcode, InteropService, opcodes};

use crate::{
    address::ScriptHash,
    error::{KeyError, Result},
    key::{PubKey, PUBLIC_KEY_SIZE},
    util::{encode_02x, to_bytes_padded}
};

/// PUSHDATA1 + length + key + SYSCALL + service hash
pub const VERIFICATION_SCRIPT_SIZE: usize = 2 + PUBLIC_KEY_SIZE + 1 + 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerificationScript {
    code: Vec<u8>
}

impl VerificationScript {
    /**
        Wrap raw script bytes. No validation is done, see `public_key()`.
    */
    pub fn from_bytes(code: Vec<u8>) -> Self {
        Self { code }
    }

    /**
        Build the verification script of a public key.
    */
    pub fn from_pub_key(pubkey: &PubKey) -> Self {
        ScriptBuilder::new()
            .push_data(&pubkey.as_bytes())
            .sys_call(InteropService::SystemCryptoCheckSig)
            .into_script()
    }

    /**
        Build the verification script from an encoded public key held as a
        big-endian number. Leading zeroes may be missing, the value is padded
        back to 33 bytes and must decode to a point on the curve.
    */
    pub fn from_encoded_pub_key(encoded: &[u8]) -> Result<Self> {
        let padded: [u8; PUBLIC_KEY_SIZE] = to_bytes_padded(encoded)
            .map_err(|e| KeyError::InvalidKey(e.to_string()))?;
        Ok(Self::from_pub_key(&PubKey::from_slice(&padded)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn as_hex(&self) -> String {
        encode_02x(&self.code)
    }

    /**
        Hash the script with Hash160
    */
    pub fn script_hash(&self) -> ScriptHash {
        ScriptHash::from_script(self)
    }

    /// Whether the script follows the single signature template.
    pub fn is_single_sig(&self) -> bool {
        let code = &self.code;
        code.len() == VERIFICATION_SCRIPT_SIZE
            && code[0] == opcodes::PUSHDATA1.into_u8()
            && code[1] as usize == PUBLIC_KEY_SIZE
            && code[2 + PUBLIC_KEY_SIZE] == opcodes::SYSCALL.into_u8()
            && code[3 + PUBLIC_KEY_SIZE..] == InteropService::SystemCryptoCheckSig.hash()
    }

    /**
        Extracts the public key embedded in a single signature script.
    */
    pub fn public_key(&self) -> Result<PubKey> {
        if !self.is_single_sig() {
            return Err(KeyError::InvalidInput("not a single signature verification script".to_string()))
        }
        PubKey::from_slice(&self.code[2..2 + PUBLIC_KEY_SIZE])
    }
}
