//! Unsigned big-endian encodings.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{CodecError, CodecResult};

/// Minimal big-endian bytes of `n`. Zero encodes as the empty slice.
pub fn unsigned_minimal_bytes(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }
    n.to_bytes_be()
}

/// Big-endian bytes of `n`, left-padded with zeros to exactly `width` bytes.
pub fn unsigned_fixed_width_bytes(n: &BigUint, width: usize) -> CodecResult<Vec<u8>> {
    let minimal = unsigned_minimal_bytes(n);
    if minimal.len() > width {
        return Err(CodecError::DoesNotFit {
            width,
            needed: minimal.len(),
        });
    }
    Ok(pad_left(&minimal, width))
}

/// Right-align `bytes` in a zero-filled buffer of `width` bytes.
///
/// Callers must check that `bytes` fits; if it is longer than `width` the
/// input is returned unchanged.
pub fn pad_left(bytes: &[u8], width: usize) -> Vec<u8> {
    if bytes.len() >= width {
        return bytes.to_vec();
    }
    let mut out = vec![0u8; width - bytes.len()];
    out.extend_from_slice(bytes);
    out
}

/// Interpret big-endian bytes as an unsigned integer. Empty input is zero.
pub fn unsigned_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
