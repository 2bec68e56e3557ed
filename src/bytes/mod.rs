use hex::FromHexError;
use thiserror::Error;

pub mod xor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("hex input has odd length {length}")]
    OddLength { length: usize },
    #[error("invalid hex digit {} at index {}", describe(.byte), .index)]
    InvalidDigit { byte: u8, index: usize },
}

fn describe(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("{:?}", char::from(*byte))
    } else {
        format!("byte 0x{byte:02X}")
    }
}

/// Decodes a hex string, two digits per byte, most significant nibble first.
///
/// Either case is accepted. Odd-length input is rejected before any digit is
/// looked at; otherwise the first non-hex byte is reported with its offset.
pub fn from_hex<S: AsRef<[u8]>>(input: S) -> Result<Vec<u8>, DecodeError> {
    let input = input.as_ref();
    hex::decode(input).map_err(|err| match err {
        FromHexError::InvalidHexCharacter { index, .. } => DecodeError::InvalidDigit {
            byte: input[index],
            index,
        },
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            DecodeError::OddLength { length: input.len() }
        }
    })
}

/// Uppercase, no separators, no prefix.
pub fn to_hex<S: AsRef<[u8]>>(bytes: S) -> String {
    hex::encode_upper(bytes)
}
