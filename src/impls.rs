/**
    This module combines all the boilerplate
    implementations of fmt::Display and fmt::Debug.

    Nothing here may print private key material.
*/

use crate::{
    key,
    keypair,
    script,
    signature,
    util::encode_02x
};
use std::fmt;

/*
    key module impls
*/
impl fmt::Debug for key::PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivKey(<redacted>)")
    }
}

impl fmt::Display for key::PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

/*
    keypair module impls
*/
impl fmt::Debug for keypair::KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
         .field("private_key", self.private_key())
         .field("public_key", &self.public_key().as_hex())
         .finish()
    }
}

/*
    signature module impls
*/
impl fmt::Display for signature::EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", encode_02x(&self.to_bytes()))
    }
}

/*
    script module impls
*/
impl fmt::Display for script::VerificationScript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

#[cfg(test)]
mod tests {
    use crate::{keypair::KeyPair, U256};

    #[test]
    fn debug_output_hides_private_key() {
        let pair = KeyPair::from_scalar(&U256::from_u64(0xdead_beef)).unwrap();
        let printed = format!("{:?}", pair);

        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("deadbeef"));
        assert!(printed.contains(&pair.public_key().as_hex()));
    }

    #[test]
    fn signature_display_is_fixed_width_hex() {
        let pair = KeyPair::from_scalar(&U256::ONE).unwrap();
        let sig = pair.sign(&[0x11; 32]).unwrap();
        assert_eq!(sig.to_string().len(), 128);
    }
}
