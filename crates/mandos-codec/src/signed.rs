//! Two's-complement big-endian encodings over arbitrary-precision integers.

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::{CodecError, CodecResult};

/// Minimal two's-complement bytes of `n`. Zero encodes as the empty slice.
///
/// Positive values whose top bit would be set get a leading `0x00`;
/// negative values keep exactly one leading byte with the sign bit set.
pub fn signed_minimal_bytes(n: &BigInt) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }
    n.to_signed_bytes_be()
}

/// Two's-complement bytes of `n`, sign-extended to exactly `width` bytes.
pub fn signed_fixed_width_bytes(n: &BigInt, width: usize) -> CodecResult<Vec<u8>> {
    let minimal = signed_minimal_bytes(n);
    if minimal.len() > width {
        return Err(CodecError::DoesNotFit {
            width,
            needed: minimal.len(),
        });
    }
    let fill = if n.sign() == Sign::Minus { 0xFF } else { 0x00 };
    let mut out = vec![fill; width - minimal.len()];
    out.extend_from_slice(&minimal);
    Ok(out)
}

/// Interpret big-endian two's-complement bytes. Empty input is zero.
pub fn signed_from_bytes(bytes: &[u8]) -> BigInt {
    if bytes.is_empty() {
        return BigInt::zero();
    }
    BigInt::from_signed_bytes_be(bytes)
}
