/*
    Key pair used to authorize Neo transactions.

    The public key is derived once from the private key when the pair is
    built and can't be changed afterwards, so every live KeyPair holds
    public == G * private.
*/

use crate::{
    PrehashSigner,
    Signature,
    SigningKey,
    ToEncodedPoint,
    U256,
    Zeroize,
    address::ScriptHash,
    config::ProtocolSettings,
    error::{KeyError, Result},
    key::{PrivKey, PubKey, PUBLIC_KEY_SIZE},
    script::VerificationScript,
    signature::{EcdsaSignature, SIGNATURE_SIZE},
    util::encode_02x
};
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

/// Length of the message digest accepted by `sign`.
pub const DIGEST_SIZE: usize = 32;

#[derive(Clone)]
pub struct KeyPair {
    private_key: PrivKey,
    public_key: PubKey
}

impl KeyPair {
    fn from_priv_key(private_key: PrivKey) -> Self {
        let public_key = PubKey::from_priv_key(&private_key);
        let pair = Self { private_key, public_key };
        debug!(script_hash = %pair.script_hash(), "created key pair");
        pair
    }

    /**
        Creates a key pair from a private scalar.
        Fails with `InvalidKey` if the scalar is 0 or not below the curve order.
    */
    pub fn from_scalar(scalar: &U256) -> Result<Self> {
        Ok(Self::from_priv_key(PrivKey::from_scalar(scalar)?))
    }

    /**
        Creates a key pair from exactly 32 big-endian private key bytes.
    */
    pub fn from_bytes(private_key: &[u8]) -> Result<Self> {
        Ok(Self::from_priv_key(PrivKey::from_slice(private_key)?))
    }

    /**
        Adopts a key pair generated by the p256 signing key API.
        The public key is taken from the handle's verifying key as is.
    */
    pub fn from_signing_key(key: &SigningKey) -> Result<Self> {
        let mut field = key.to_bytes();
        let private_key = PrivKey::from_slice(&field);
        field.as_mut_slice().zeroize();

        let private_key = private_key?;
        let public_key = PubKey::from_slice(key.verifying_key().to_encoded_point(true).as_bytes())?;

        Ok(Self { private_key, public_key })
    }

    /**
        Generates a fresh random key pair.
    */
    pub fn generate() -> Self {
        Self::from_priv_key(PrivKey::new_rand())
    }

    /**
        Restores a key pair from a WIF string produced by `export_as_wif`.
    */
    pub fn from_wif(wif: &str) -> Result<Self> {
        Ok(Self::from_priv_key(PrivKey::from_wif(wif)?))
    }

    pub fn private_key(&self) -> &PrivKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PubKey {
        &self.public_key
    }

    /// Compressed public key (33 bytes).
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.public_key.as_bytes()
    }

    /**
        Signs a 32 byte message digest.

        The nonce is derived with HMAC-SHA256 as in RFC 6979, so the same
        key and digest always give the same (r, s). s is NOT normalised.
    */
    pub fn sign(&self, digest: &[u8]) -> Result<EcdsaSignature> {
        if digest.len() != DIGEST_SIZE {
            return Err(KeyError::InvalidInput(
                format!("Expected a {} byte digest, found {} bytes", DIGEST_SIZE, digest.len())
            ))
        }
        trace!(digest = %encode_02x(digest), "signing digest");

        let signer = SigningKey::from(self.private_key.secret_key().clone());
        let sig: Signature = signer.sign_prehash(digest)
            .map_err(|e| KeyError::InvalidInput(format!("signing failed: {}", e)))?;

        let (r, s) = sig.split_bytes();
        EcdsaSignature::new(U256::from_be_slice(&r), U256::from_be_slice(&s))
    }

    /**
        Signs a 32 byte message digest and returns r || s, 32 bytes each.
    */
    pub fn sign_to_bytes(&self, digest: &[u8]) -> Result<[u8; SIGNATURE_SIZE]> {
        Ok(self.sign(digest)?.to_bytes())
    }

    pub fn verification_script(&self) -> VerificationScript {
        VerificationScript::from_pub_key(&self.public_key)
    }

    pub fn script_hash(&self) -> ScriptHash {
        self.verification_script().script_hash()
    }

    /// Address under the default protocol settings.
    pub fn address(&self) -> String {
        self.address_with(&ProtocolSettings::default())
    }

    pub fn address_with(&self, settings: &ProtocolSettings) -> String {
        self.script_hash().to_address(settings)
    }

    /**
        Export the private key as WIF.
        The intermediate payload is wiped before this returns.
    */
    pub fn export_as_wif(&self) -> String {
        self.private_key.export_as_wif()
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.private_key == other.private_key && self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

impl Hash for KeyPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.private_key.to_bytes()[..].hash(state);
        self.public_key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Curve, NistP256, OsRng,
        hash::sha256,
        util::decode_02x
    };
    use std::collections::HashSet;

    //RFC 6979 A.2.5, P-256 with SHA-256
    const RFC_KEY: &str = "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";
    const RFC_SAMPLE_R: &str = "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716";
    const RFC_SAMPLE_S: &str = "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8";
    const RFC_TEST_R: &str = "f1abb023518351cd71d881567b1ea663ed3efcf6c5132b354f28d3b0b7d38367";
    const RFC_TEST_S: &str = "019f4113742a2b14bd25926b49c649155f267e60d3814b4c0cc84250e46f0083";

    fn rfc_pair() -> KeyPair {
        KeyPair::from_bytes(&decode_02x(RFC_KEY).unwrap()).unwrap()
    }

    #[test]
    fn rfc6979_sample_vector() {
        let sig = rfc_pair().sign(&sha256(b"sample")).unwrap();
        assert_eq!(sig.r(), U256::from_be_hex(RFC_SAMPLE_R));
        assert_eq!(sig.s(), U256::from_be_hex(RFC_SAMPLE_S));

        //s is in the upper half and must stay there
        assert!(sig.is_high_s());
    }

    #[test]
    fn rfc6979_test_vector_bytes() {
        let bytes = rfc_pair().sign_to_bytes(&sha256(b"test")).unwrap();
        assert_eq!(encode_02x(&bytes[..32]), RFC_TEST_R);
        assert_eq!(encode_02x(&bytes[32..]), RFC_TEST_S);
    }

    #[test]
    fn signatures_verify() {
        let pair = KeyPair::generate();
        let digest = sha256(b"transaction");
        let sig = pair.sign(&digest).unwrap();

        assert!(pair.public_key().verify(&digest, &sig));
        assert!(!pair.public_key().verify(&sha256(b"other"), &sig));
        assert!(!KeyPair::generate().public_key().verify(&digest, &sig));
    }

    #[test]
    fn digest_length_is_checked() {
        let pair = rfc_pair();
        assert!(matches!(pair.sign(&[0x01; 31]), Err(KeyError::InvalidInput(_))));
        assert!(matches!(pair.sign(&[0x01; 33]), Err(KeyError::InvalidInput(_))));
        assert!(matches!(pair.sign_to_bytes(&[]), Err(KeyError::InvalidInput(_))));
    }

    #[test]
    fn construction_boundaries() {
        assert!(matches!(KeyPair::from_scalar(&U256::ZERO), Err(KeyError::InvalidKey(_))));
        assert!(matches!(KeyPair::from_scalar(&NistP256::ORDER), Err(KeyError::InvalidKey(_))));
        assert!(matches!(KeyPair::from_bytes(&[0x01; 31]), Err(KeyError::InvalidKey(_))));
        assert!(matches!(KeyPair::from_bytes(&[0x01; 33]), Err(KeyError::InvalidKey(_))));

        let top = KeyPair::from_scalar(&NistP256::ORDER.wrapping_sub(&U256::ONE)).unwrap();
        //(n - 1) * G = -G
        assert_eq!(top.public_key().as_hex(), "026b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
    }

    #[test]
    fn rfc_key_derivations() {
        let pair = rfc_pair();
        assert_eq!(pair.private_key().to_scalar(), U256::from_be_hex(RFC_KEY));
        assert_eq!(pair.public_key().as_hex(), "0360fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6");
        assert_eq!(
            pair.verification_script().as_hex(),
            "0c210360fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb64156e7b327"
        );
        assert_eq!(hex::encode(pair.script_hash().as_bytes()), "64766e64fe93ef50325d61006394543365d73caf");
        assert_eq!(pair.address(), "NV5AdggdfWayuYs46H9GAuepDPLEe68pQP");
        assert_eq!(pair.export_as_wif(), "L3ymBCnnfiRCFkMhNoY2fneJGEZH9BMLcmVnwVTbzocfBgrzkM28");
    }

    #[test]
    fn wif_round_trip() {
        let pair = KeyPair::from_scalar(&U256::ONE).unwrap();
        let wif = pair.export_as_wif();
        assert_eq!(wif, "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn");

        let decoded = crate::encoding::base58::Base58::check_decode(&wif).unwrap();
        let mut expected = vec![0x80];
        expected.extend_from_slice(&[0u8; 31]);
        expected.push(0x01);
        expected.push(0x01);
        assert_eq!(&decoded[..], &expected[..]);

        assert!(KeyPair::from_wif(&wif).unwrap() == pair);
    }

    #[test]
    fn native_handle() {
        let signing_key = SigningKey::random(&mut OsRng);
        let adopted = KeyPair::from_signing_key(&signing_key).unwrap();
        let restored = KeyPair::from_bytes(&signing_key.to_bytes()).unwrap();

        assert!(adopted == restored);
        assert_eq!(adopted.public_key(), restored.public_key());
    }

    #[test]
    fn equality_and_hashing() {
        let a = KeyPair::from_scalar(&U256::from_u64(42)).unwrap();
        let b = KeyPair::from_scalar(&U256::from_u64(42)).unwrap();
        let c = KeyPair::from_scalar(&U256::from_u64(43)).unwrap();

        assert!(a == b);
        assert!(a != c);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(c);
        assert_eq!(set.len(), 2);
    }
}
