//! Numeric literals: plain, signed and fixed-width.
//!
//! Unsigned text is one of:
//! - `0x…` hex, decoded byte-for-byte (an odd digit count gets a leading
//!   zero nibble, leading zero bytes are kept)
//! - `0b…` binary, minimal bytes
//! - decimal, minimal bytes
//!
//! `_` and `,` may group binary and decimal digits. A leading `+` or `-`
//! makes the literal signed and switches to two's complement.

use mandos_codec::{
    signed_fixed_width_bytes, signed_minimal_bytes, unsigned_fixed_width_bytes,
    unsigned_from_bytes, unsigned_minimal_bytes,
};
use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{InterpretError, InterpretResult, NumberBase};
use crate::prefixes::{FixedWidth, BINARY_PREFIXES, DIGIT_SEPARATORS, HEX_PREFIXES};

/// Encode `text` under a fixed-width marker. `literal` is the full literal,
/// used for diagnostics.
pub(crate) fn interpret_fixed_width(
    text: &str,
    fw: FixedWidth,
    literal: &str,
) -> InterpretResult<Vec<u8>> {
    if fw.signed {
        interpret_number(text, Some(fw.width), literal)
    } else if text.starts_with(['+', '-']) {
        Err(InterpretError::UnexpectedSign {
            literal: literal.to_string(),
        })
    } else {
        unsigned_fixed(text, fw.width, literal)
    }
}

/// Encode a general number, minimally when `width` is `None`.
pub(crate) fn interpret_number(
    text: &str,
    width: Option<usize>,
    literal: &str,
) -> InterpretResult<Vec<u8>> {
    let negative = match text.as_bytes().first() {
        Some(b'-') => true,
        Some(b'+') => false,
        _ => {
            return match width {
                None => unsigned_bytes(text),
                Some(width) => unsigned_fixed(text, width, literal),
            };
        }
    };

    let magnitude = BigInt::from_biguint(Sign::Plus, unsigned_value(&text[1..])?);
    let n = if negative { -magnitude } else { magnitude };
    match width {
        None => Ok(signed_minimal_bytes(&n)),
        Some(width) => {
            signed_fixed_width_bytes(&n, width).map_err(|_| does_not_fit(literal, width))
        }
    }
}

fn unsigned_fixed(text: &str, width: usize, literal: &str) -> InterpretResult<Vec<u8>> {
    let n = unsigned_value(text)?;
    unsigned_fixed_width_bytes(&n, width).map_err(|_| does_not_fit(literal, width))
}

fn unsigned_value(text: &str) -> InterpretResult<BigUint> {
    unsigned_bytes(text).map(|bytes| unsigned_from_bytes(&bytes))
}

/// Bytes of an unsigned literal. Hex keeps its written length.
pub(crate) fn unsigned_bytes(text: &str) -> InterpretResult<Vec<u8>> {
    if let Some(digits) = strip_any(text, &HEX_PREFIXES) {
        return decode_hex(digits).ok_or_else(|| malformed(text, NumberBase::Hex));
    }

    let grouped: String = text
        .chars()
        .filter(|c| !DIGIT_SEPARATORS.contains(c))
        .collect();

    if strip_any(text, &BINARY_PREFIXES).is_some() {
        let n = parse_radix(&grouped[2..], 2)
            .ok_or_else(|| malformed(text, NumberBase::Binary))?;
        return Ok(unsigned_minimal_bytes(&n));
    }

    let n = parse_radix(&grouped, 10).ok_or_else(|| malformed(text, NumberBase::Decimal))?;
    Ok(unsigned_minimal_bytes(&n))
}

fn decode_hex(digits: &str) -> Option<Vec<u8>> {
    if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}")).ok()
    } else {
        hex::decode(digits).ok()
    }
}

fn parse_radix(digits: &str, radix: u32) -> Option<BigUint> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
}

fn strip_any<'a>(text: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|p| text.strip_prefix(p))
}

fn malformed(text: &str, base: NumberBase) -> InterpretError {
    InterpretError::MalformedNumber {
        literal: text.to_string(),
        base,
    }
}

fn does_not_fit(literal: &str, width: usize) -> InterpretError {
    InterpretError::DoesNotFit {
        literal: literal.to_string(),
        width,
    }
}
