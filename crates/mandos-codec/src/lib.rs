//! Mandos numeric codec: arbitrary-precision integers to canonical bytes.
//!
//! All encodings are big-endian. Two families are provided:
//!
//! - unsigned: minimal (no leading zero byte, empty for zero) or padded to
//!   a fixed width with `0x00`
//! - signed two's complement: minimal (shortest form that keeps the sign
//!   bit, empty for zero) or sign-extended to a fixed width
//!
//! Fixed-width encoders never truncate; a value that does not fit is
//! reported as [`CodecError::DoesNotFit`].

mod error;
mod signed;
mod unsigned;

pub use error::{CodecError, CodecResult};
pub use signed::{signed_fixed_width_bytes, signed_from_bytes, signed_minimal_bytes};
pub use unsigned::{
    pad_left, unsigned_fixed_width_bytes, unsigned_from_bytes, unsigned_minimal_bytes,
};
