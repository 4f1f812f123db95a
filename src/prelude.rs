/*
    This module contains the default imports for the library.

    Import the library using:
        use neo_keypair::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::{
        PubKey,
        PrivKey
    },

    keypair::KeyPair,

    signature::EcdsaSignature,

    address::{
        Address,
        ScriptHash
    },

    script::VerificationScript,

    config::ProtocolSettings,

    error::{
        KeyError,
        Result
    },

    util::{
        encode_02x,
        decode_02x
    }

};

pub use p256::elliptic_curve::bigint::U256;
