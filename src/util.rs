use crate::error::{KeyError, Result};

/*
    Decodes hex strings into a byte vector, an optional 0x prefix is ignored
*/
pub fn decode_02x(hex: &str) -> Result<Vec<u8>> {
    let hex = hex.trim_start_matches("0x");
    hex::decode(hex).map_err(|e| KeyError::InvalidInput(format!("bad hex: {}", e)))
}

/*
    Encodes byte slices into hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/**
    Left pads a big-endian unsigned integer with zeroes to exactly N bytes.
    Redundant leading zero bytes are stripped first, so a 33 byte encoding
    of a 32 byte value still fits into N = 32.
*/
pub fn to_bytes_padded<const N: usize>(value: &[u8]) -> Result<[u8; N]> {
    let first = value.iter().position(|b| *b != 0).unwrap_or(value.len());
    let significant = &value[first..];
    if significant.len() > N {
        return Err(KeyError::InvalidInput(
            format!("Expected at most {} significant bytes, found {}", N, significant.len())
        ))
    }

    let mut padded = [0u8; N];
    padded[N - significant.len()..].copy_from_slice(significant);
    Ok(padded)
}

/**
    Converts a slice into an array, failing on a length mismatch
*/
pub fn try_into<T: Copy + Default, const N: usize>(v: &[T]) -> Result<[T; N]> {
    if v.len() != N {
        return Err(KeyError::InvalidInput(format!("Expected {} bytes, found {}", N, v.len())))
    }
    let mut array = [T::default(); N];
    array.copy_from_slice(v);
    Ok(array)
}
