/*
    Private and public keys on the secp256r1 curve.

    A PrivKey is always a scalar in [1, n). It can only be built through
    constructors that validate the range, and its bytes are wiped on drop.
*/

use crate::{
    SecretKey,
    PublicKey,
    FieldBytes,
    OsRng,
    ToEncodedPoint,
    PrehashVerifier,
    Signature,
    VerifyingKey,
    U256,
    Encoding,
    Zeroizing,
    encoding::{
        base58::Base58,
        version_prefix::{VersionPrefix, WIF_COMPRESSED_FLAG}
    },
    error::{KeyError, Result},
    signature::EcdsaSignature,
    util::encode_02x
};
use std::cmp::Ordering;
use tracing::warn;

pub const PRIVATE_KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 33;
const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;
/// Version byte + key + compression flag + checksum
const WIF_DECODED_SIZE: usize = 1 + PRIVATE_KEY_SIZE + 1 + 4;

#[derive(Clone)]
pub struct PrivKey(SecretKey);

impl PrivKey {

    /**
        Generates a new random key from the operating system's entropy source.
    */
    pub fn new_rand() -> Self {
        Self(SecretKey::random(&mut OsRng))
    }

    /**
        Use a predefined byte array as a secret key.
        The slice must be exactly 32 big-endian bytes encoding a value in [1, n).
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self> {
        if byte_array.len() != PRIVATE_KEY_SIZE {
            return Err(KeyError::InvalidKey(
                format!("Expected {} private key bytes, found {}", PRIVATE_KEY_SIZE, byte_array.len())
            ))
        }

        SecretKey::from_bytes(FieldBytes::from_slice(byte_array))
            .map(Self)
            .map_err(|_| KeyError::InvalidKey("private key must be in the range [1, n)".to_string()))
    }

    /**
        Use a 256 bit integer as a secret key.
    */
    pub fn from_scalar(scalar: &U256) -> Result<Self> {
        let bytes = Zeroizing::new(scalar.to_be_bytes());
        Self::from_slice(&bytes[..])
    }

    /// The key as a 256 bit unsigned integer.
    pub fn to_scalar(&self) -> U256 {
        U256::from_be_slice(&self.to_bytes()[..])
    }

    /**
        Serializes the private key into 32 big-endian bytes.
        The returned buffer is wiped when dropped.
    */
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        let mut bytes = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        let mut field = self.0.to_bytes();
        bytes.copy_from_slice(&field);
        zeroize::Zeroize::zeroize(field.as_mut_slice());
        bytes
    }

    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.0
    }

    /*
        Export the private key in wallet-import-format:
        Base58Check( 0x80 || key || 0x01 )
    */
    pub fn export_as_wif(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(PRIVATE_KEY_SIZE + 1));
        payload.extend_from_slice(&self.to_bytes()[..]);
        payload.push(WIF_COMPRESSED_FLAG);

        Base58::new(VersionPrefix::PrivateKeyWIF, &payload).check_encode()
    }

    /**
        Import a private key from wallet-import-format.
        Only the compressed form (38 decoded bytes, trailing 0x01 flag) is accepted.
    */
    pub fn from_wif(wif: &str) -> Result<Self> {
        let decoded = Base58::check_decode(wif).map_err(|e| {
            warn!(error = %e, "rejected WIF string");
            KeyError::from(e)
        })?;

        //check_decode strips the 4 checksum bytes
        if decoded.len() != WIF_DECODED_SIZE - 4 {
            return Err(KeyError::InvalidKey(format!("Incorrect WIF length {}", decoded.len() + 4)))
        }
        if decoded[0] != VersionPrefix::WIF_BYTE {
            return Err(KeyError::InvalidKey(format!("Bad WIF version byte {:#04x}", decoded[0])))
        }
        if decoded[PRIVATE_KEY_SIZE + 1] != WIF_COMPRESSED_FLAG {
            return Err(KeyError::InvalidKey("WIF is not flagged as compressed".to_string()))
        }

        Self::from_slice(&decoded[1..=PRIVATE_KEY_SIZE])
    }
}

impl PartialEq for PrivKey {
    fn eq(&self, other: &Self) -> bool {
        //SecretKey compares in constant time
        self.0 == other.0
    }
}

impl Eq for PrivKey {}

impl From<SecretKey> for PrivKey {
    fn from(key: SecretKey) -> Self {
        Self(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubKey(PublicKey);

impl PubKey {

    /**
        Finds the public key from a secret key.

        Is the result of the base point G of secp256r1 multiplied k times, where k is the private key.
    */
    pub fn from_priv_key(k: &PrivKey) -> Self {
        Self(k.0.public_key())
    }

    /**
        Parse a SEC1 encoded public key, either compressed (33 bytes)
        or uncompressed (65 bytes). The point must be on the curve.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self> {
        match byte_array.len() {
            PUBLIC_KEY_SIZE | UNCOMPRESSED_PUBLIC_KEY_SIZE => {},
            x => return Err(KeyError::InvalidKey(format!("Public key of {} bytes is neither compressed nor uncompressed", x)))
        }

        PublicKey::from_sec1_bytes(byte_array)
            .map(Self)
            .map_err(|_| KeyError::InvalidKey("bytes do not encode a point on secp256r1".to_string()))
    }

    /**
        Returns the compressed public key as a byte array.
    */
    pub fn as_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(self.0.to_encoded_point(true).as_bytes());
        bytes
    }

    /**
        Returns the uncompressed public key (0x04 || x || y).
    */
    pub fn decompressed_bytes(&self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_SIZE] {
        let mut bytes = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(self.0.to_encoded_point(false).as_bytes());
        bytes
    }

    /**
       Return the compressed public key as a hex string.
    */
    pub fn as_hex(&self) -> String {
        encode_02x(&self.as_bytes())
    }

    /**
        Checks a signature over a 32 byte digest against this key.
        High-s signatures are accepted.
    */
    pub fn verify(&self, digest: &[u8], signature: &EcdsaSignature) -> bool {
        let sig = match Signature::from_slice(&signature.to_bytes()) {
            Ok(x) => x,
            Err(_) => return false
        };
        VerifyingKey::from(&self.0).verify_prehash(digest, &sig).is_ok()
    }
}

impl PartialOrd for PubKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PubKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(&other.as_bytes())
    }
}

impl std::hash::Hash for PubKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Curve, NistP256, util::decode_02x};

    const KEY_ONE_WIF: &str = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
    const GENERATOR_HEX: &str = "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

    fn key_one() -> PrivKey {
        PrivKey::from_scalar(&U256::ONE).unwrap()
    }

    #[test]
    fn private_key_range() {
        assert!(PrivKey::from_scalar(&U256::ZERO).is_err());
        assert!(PrivKey::from_scalar(&NistP256::ORDER).is_err());
        assert!(PrivKey::from_scalar(&NistP256::ORDER.wrapping_sub(&U256::ONE)).is_ok());
        assert!(PrivKey::from_scalar(&U256::MAX).is_err());
    }

    #[test]
    fn private_key_length() {
        assert!(matches!(PrivKey::from_slice(&[0x01; 31]), Err(KeyError::InvalidKey(_))));
        assert!(matches!(PrivKey::from_slice(&[0x01; 33]), Err(KeyError::InvalidKey(_))));
        assert!(PrivKey::from_slice(&[0x01; 32]).is_ok());
    }

    #[test]
    fn scalar_and_bytes_agree() {
        let k = key_one();
        assert_eq!(k.to_scalar(), U256::ONE);
        assert_eq!(k.to_bytes()[31], 0x01);
        assert!(k.to_bytes()[..31].iter().all(|b| *b == 0));
    }

    #[test]
    fn generator_public_key() {
        let pk = PubKey::from_priv_key(&key_one());
        assert_eq!(pk.as_hex(), GENERATOR_HEX);
        assert_eq!(pk.decompressed_bytes()[0], 0x04);
        assert_eq!(&pk.decompressed_bytes()[1..33], &pk.as_bytes()[1..]);
    }

    #[test]
    fn public_key_parsing() {
        let pk = PubKey::from_slice(&decode_02x(GENERATOR_HEX).unwrap()).unwrap();
        assert_eq!(PubKey::from_slice(&pk.decompressed_bytes()).unwrap(), pk);

        //x = 1 has no point on secp256r1
        let mut off_curve = [0u8; 33];
        off_curve[0] = 0x02;
        off_curve[32] = 0x01;
        assert!(PubKey::from_slice(&off_curve).is_err());
        assert!(PubKey::from_slice(&pk.as_bytes()[..32]).is_err());
    }

    #[test]
    fn wif_export_vector() {
        assert_eq!(key_one().export_as_wif(), KEY_ONE_WIF);
    }

    #[test]
    fn wif_import() {
        assert!(PrivKey::from_wif(KEY_ONE_WIF).unwrap() == key_one());

        let random = PrivKey::new_rand();
        assert!(PrivKey::from_wif(&random.export_as_wif()).unwrap() == random);
    }

    #[test]
    fn wif_import_rejections() {
        //Checksum broken
        assert!(matches!(
            PrivKey::from_wif("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWo"),
            Err(KeyError::Encoding(_))
        ));

        //Uncompressed WIF (no 0x01 flag)
        let uncompressed = Base58::new(VersionPrefix::PrivateKeyWIF, &key_one().to_bytes()[..]).check_encode();
        assert!(matches!(PrivKey::from_wif(&uncompressed), Err(KeyError::InvalidKey(_))));

        //Wrong version byte
        let mut payload = key_one().to_bytes().to_vec();
        payload.push(WIF_COMPRESSED_FLAG);
        let testnet = Base58::new(VersionPrefix::Address(0xef), &payload).check_encode();
        assert!(matches!(PrivKey::from_wif(&testnet), Err(KeyError::InvalidKey(_))));

        //Zero key
        let mut zero = vec![0u8; 32];
        zero.push(WIF_COMPRESSED_FLAG);
        let zero = Base58::new(VersionPrefix::PrivateKeyWIF, &zero).check_encode();
        assert!(matches!(PrivKey::from_wif(&zero), Err(KeyError::InvalidKey(_))));
    }

    #[test]
    fn public_keys_sort_by_encoding() {
        let mut keys: Vec<PubKey> = (0..5).map(|_| PubKey::from_priv_key(&PrivKey::new_rand())).collect();
        keys.sort();
        for pair in keys.windows(2) {
            assert!(pair[0].as_bytes() <= pair[1].as_bytes());
        }
    }
}
