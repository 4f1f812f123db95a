/*
    Library to create, restore and use secp256r1 key pairs for Neo N3.

    A key pair signs transaction digests with deterministic ECDSA,
    derives its single signature verification script, script hash and
    address, and exports its private key as WIF.

    References:
        - RFC 6979 (https://www.rfc-editor.org/rfc/rfc6979)
            deterministic nonce derivation used when signing

        - SEC 1 v2 (https://www.secg.org/sec1-v2.pdf)
            compressed point encoding of public keys

        - Neo N3 documentation (https://docs.neo.org/)
            verification scripts, script hashes and address versions
*/

//Outward facing modules
pub mod key;
pub mod keypair;
pub mod signature;
pub mod address;
pub mod script;
pub mod encoding;
pub mod config;
pub mod error;
pub mod prelude;

//Modules for internal use
mod hash;
pub mod util;
mod impls;


pub use error::{KeyError, Result};

//Dependencies
use rand::rngs::OsRng;
use p256::{
    FieldBytes, NistP256, PublicKey, SecretKey,
    ecdsa::{
        Signature, SigningKey, VerifyingKey,
        signature::hazmat::{PrehashSigner, PrehashVerifier}
    },
    elliptic_curve::{
        Curve,
        bigint::{Encoding, U256},
        sec1::ToEncodedPoint
    }
};
use sha2::{Sha256, Digest};
use ripemd::Ripemd160;
use zeroize::{Zeroize, Zeroizing};
use bs58;
