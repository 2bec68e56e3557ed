use itertools::Itertools;

/// XORs `a` and `b` byte by byte. The longer operand is cut to the length of
/// the shorter one; its trailing bytes are ignored.
pub fn fixed_xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(a, b)| a ^ b).collect_vec()
}
