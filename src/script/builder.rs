/* 

    Script builder module.

*/

use super::VerificationScript;

#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub code: Vec<u8>
}

impl Builder {
    /// Return a new instance of self
    pub fn new() -> Self  {
        Self { code: Vec::new() }
    }

    /// Push an opcode into self
    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.code.push(opcode.into_u8());
        self
    }

    //Push a slice into the code
    pub fn push_slice(mut self, slice: &[u8]) -> Self {
        self.code.extend_from_slice(slice);
        self
    }

    /**
        Push data onto the stack with the smallest PUSHDATA opcode that fits its length.
    */
    pub fn push_data(self, data: &[u8]) -> Self {
        let len = data.len();
        let builder = if len <= u8::MAX as usize {
            self.push_opcode(opcodes::PUSHDATA1).push_slice(&[len as u8])
        } else if len <= u16::MAX as usize {
            self.push_opcode(opcodes::PUSHDATA2).push_slice(&(len as u16).to_le_bytes())
        } else {
            self.push_opcode(opcodes::PUSHDATA4).push_slice(&(len as u32).to_le_bytes())
        };
        builder.push_slice(data)
    }

    /// Call an interop service by its 4 byte hash
    pub fn sys_call(self, service: InteropService) -> Self {
        self.push_opcode(opcodes::SYSCALL).push_slice(&service.hash())
    }

    /// Convert self into a verification script
    pub fn into_script(self) -> VerificationScript {
        VerificationScript::from_bytes(self.code)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    code: u8
}

impl Opcode {
    pub fn into_u8(self) -> u8 {
        self.code
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Self {
        Self { code }
    }
}

// Opcode constants
pub mod opcodes {
    use super::Opcode;

    /// The next byte holds the length of the data to push
    pub const PUSHDATA1: Opcode = Opcode {code: 0x0c};
    /// The next 2 bytes (little-endian) hold the length of the data to push
    pub const PUSHDATA2: Opcode = Opcode {code: 0x0d};
    /// The next 4 bytes (little-endian) hold the length of the data to push
    pub const PUSHDATA4: Opcode = Opcode {code: 0x0e};
    /// Call the interop service named by the next 4 bytes
    pub const SYSCALL: Opcode = Opcode {code: 0x41};
}

/// Interop services reachable through SYSCALL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteropService {
    SystemCryptoCheckSig
}

impl InteropService {
    pub fn name(&self) -> &'static str {
        match self {
            InteropService::SystemCryptoCheckSig => "System.Crypto.CheckSig"
        }
    }

    /**
        First 4 bytes of Sha256 of the service name.
    */
    pub fn hash(&self) -> [u8; 4] {
        let mut hash = [0u8; 4];
        hash.copy_from_slice(&crate::hash::sha256(self.name())[..4]);
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_sig_service_hash() {
        assert_eq!(InteropService::SystemCryptoCheckSig.hash(), [0x56, 0xe7, 0xb3, 0x27]);
    }

    #[test]
    fn push_data_prefixes() {
        let short = Builder::new().push_data(&[0xaa; 3]).code;
        assert_eq!(short, vec![0x0c, 0x03, 0xaa, 0xaa, 0xaa]);

        let long = Builder::new().push_data(&[0xbb; 256]).code;
        assert_eq!(&long[..3], &[0x0d, 0x00, 0x01]);
        assert_eq!(long.len(), 3 + 256);
    }
}
