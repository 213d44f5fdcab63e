//! ASCII hex nibble codec
//!
//! Shared by the parser (digit to nibble) and the renderers (nibble to
//! digit). Everything works on single bytes so nothing needs a buffer
//! larger than the caller's.

const UPPER: &[u8; 16] = b"0123456789ABCDEF";
const LOWER: &[u8; 16] = b"0123456789abcdef";

/// Decode one ASCII hex digit, either case.
///
/// Returns `None` for anything that is not `0-9`, `a-f` or `A-F`.
pub(crate) const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Encode the low four bits of `n` as an ASCII digit.
pub(crate) const fn digit(n: u8, uppercase: bool) -> u8 {
    let table = if uppercase { UPPER } else { LOWER };
    table[(n & 0x0F) as usize]
}

/// Encode a byte as two uppercase ASCII digits, high nibble first.
pub(crate) const fn byte_to_digits(b: u8) -> [u8; 2] {
    [digit(b >> 4, true), digit(b, true)]
}
