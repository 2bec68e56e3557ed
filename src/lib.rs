pub mod bytes;

use bytes::{from_hex, to_hex, xor::fixed_xor, DecodeError};

/// Decodes both hex strings, XORs them and re-encodes the result as uppercase hex.
///
/// `a` is decoded first, so when both are malformed the error describes `a`.
/// Operands of different length are truncated to the shorter one.
pub fn xor_hex(a: &str, b: &str) -> Result<String, DecodeError> {
    let a = from_hex(a)?;
    let b = from_hex(b)?;
    Ok(to_hex(fixed_xor(&a, &b)))
}

/// Recovers `unknown` from `known` and `target = known ^ unknown`.
pub fn reverse_xor(known: &str, target: &str) -> Result<String, DecodeError> {
    xor_hex(known, target)
}
