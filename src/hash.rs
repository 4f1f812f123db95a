/*
    Hash module include hash functions necessary to checksum
    WIF strings and hash a verification script into a script hash.
*/

use crate::{
    Ripemd160, Sha256, Digest
};

/*
    Takes in an byte array and returns the ripemd160 hash of it
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input);
    r.finalize().into()
}

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    r.finalize().into()
}

/// Sha256(Sha256(input)), used for Base58Check checksums.
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/// Ripemd160(Sha256(input)), used for script hashes.
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}
