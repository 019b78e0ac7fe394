//! Literal prefix tables.
//!
//! [`FIXED_WIDTH_PREFIXES`] is searched in table order. No entry is a
//! prefix of another.

/// Remainder is a logical file name handed to the file resolver.
pub const FILE_PREFIX: &str = "file:";

/// Remainder is a full expression whose bytes are hashed.
pub const KECCAK256_PREFIX: &str = "keccak256:";

/// Splits a literal into independently interpreted parts.
pub const CONCAT_SEPARATOR: char = '|';

/// Remainder is a name handed to the address codec.
pub const ADDRESS_PREFIX: &str = "address:";

/// Prefixes marking a raw ASCII string. Overridable through
/// [`InterpreterConfig::string_prefixes`](crate::InterpreterConfig).
pub const DEFAULT_STRING_PREFIXES: [&str; 3] = ["str:", "``", "''"];

pub const FALSE_LITERAL: &str = "false";
pub const TRUE_LITERAL: &str = "true";

/// Hex marker, checked case-insensitively on the `x`.
pub const HEX_PREFIXES: [&str; 2] = ["0x", "0X"];
pub const BINARY_PREFIXES: [&str; 2] = ["0b", "0B"];

/// Characters allowed between decimal or binary digits for readability.
pub const DIGIT_SEPARATORS: [char; 2] = ['_', ','];

/// A fixed-width numeric marker such as `u32:` or `i8:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth {
    pub prefix: &'static str,
    /// Width in bytes.
    pub width: usize,
    /// Whether a `+`/`-` remainder is accepted and encoded as two's complement.
    pub signed: bool,
}

const fn fixed(prefix: &'static str, width: usize, signed: bool) -> FixedWidth {
    FixedWidth {
        prefix,
        width,
        signed,
    }
}

pub const FIXED_WIDTH_PREFIXES: [FixedWidth; 8] = [
    fixed("u64:", 8, false),
    fixed("u32:", 4, false),
    fixed("u16:", 2, false),
    fixed("u8:", 1, false),
    fixed("i64:", 8, true),
    fixed("i32:", 4, true),
    fixed("i16:", 2, true),
    fixed("i8:", 1, true),
];

/// Look up the fixed-width marker `raw` starts with, if any.
pub fn fixed_width_prefix(raw: &str) -> Option<FixedWidth> {
    FIXED_WIDTH_PREFIXES
        .iter()
        .copied()
        .find(|fw| raw.starts_with(fw.prefix))
}
