//! Rule selection for a single value expression.
//!
//! [`classify`] decides which grammar rule a raw string falls under. Rules
//! are tried in this order and the first match wins:
//!
//! 1. empty string
//! 2. `file:` (the remainder is never split on `|`)
//! 3. `keccak256:` (the remainder is a full expression)
//! 4. concatenation on `|`
//! 5. `true` / `false`
//! 6. configured string prefixes
//! 7. `address:`
//! 8. fixed-width numbers (`u8:` … `i64:`)
//! 9. plain numbers

use crate::config::InterpreterConfig;
use crate::prefixes::{
    fixed_width_prefix, FixedWidth, ADDRESS_PREFIX, CONCAT_SEPARATOR, FALSE_LITERAL, FILE_PREFIX,
    KECCAK256_PREFIX, TRUE_LITERAL,
};

/// The rule a raw literal falls under, with its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'a> {
    Empty,
    /// Logical file name.
    File(&'a str),
    /// Expression to hash.
    Keccak256(&'a str),
    /// The whole raw literal, to be split on `|`.
    Concat(&'a str),
    Bool(bool),
    /// String contents after the prefix.
    Ascii(&'a str),
    /// Address name.
    Address(&'a str),
    FixedWidth { digits: &'a str, width: FixedWidth },
    Number(&'a str),
}

impl Literal<'_> {
    pub fn rule_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::File(_) => "file",
            Self::Keccak256(_) => "keccak256",
            Self::Concat(_) => "concat",
            Self::Bool(_) => "bool",
            Self::Ascii(_) => "string",
            Self::Address(_) => "address",
            Self::FixedWidth { .. } => "fixed-width number",
            Self::Number(_) => "number",
        }
    }
}

/// Select the grammar rule for `raw`.
pub fn classify<'a>(raw: &'a str, config: &InterpreterConfig) -> Literal<'a> {
    if raw.is_empty() {
        return Literal::Empty;
    }
    if let Some(name) = raw.strip_prefix(FILE_PREFIX) {
        return Literal::File(name);
    }
    if let Some(expr) = raw.strip_prefix(KECCAK256_PREFIX) {
        return Literal::Keccak256(expr);
    }
    if raw.contains(CONCAT_SEPARATOR) {
        return Literal::Concat(raw);
    }
    if raw == FALSE_LITERAL {
        return Literal::Bool(false);
    }
    if raw == TRUE_LITERAL {
        return Literal::Bool(true);
    }
    if let Some(prefix) = config.string_prefix_of(raw) {
        return Literal::Ascii(&raw[prefix.len()..]);
    }
    if let Some(name) = raw.strip_prefix(ADDRESS_PREFIX) {
        return Literal::Address(name);
    }
    if let Some(width) = fixed_width_prefix(raw) {
        return Literal::FixedWidth {
            digits: &raw[width.prefix.len()..],
            width,
        };
    }
    Literal::Number(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(raw: &str) -> &'static str {
        classify(raw, &InterpreterConfig::default()).rule_name()
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(rule(""), "empty");
        assert_eq!(rule("file:a.wasm"), "file");
        assert_eq!(rule("keccak256:str:a"), "keccak256");
        assert_eq!(rule("1|2"), "concat");
        assert_eq!(rule("true"), "bool");
        assert_eq!(rule("false"), "bool");
        assert_eq!(rule("str:abc"), "string");
        assert_eq!(rule("``abc"), "string");
        assert_eq!(rule("''abc"), "string");
        assert_eq!(rule("address:owner"), "address");
        assert_eq!(rule("u16:5"), "fixed-width number");
        assert_eq!(rule("i64:-5"), "fixed-width number");
        assert_eq!(rule("0x05"), "number");
        assert_eq!(rule("TRUE"), "number");
    }

    #[test]
    fn test_file_and_hash_win_over_concat() {
        let c = InterpreterConfig::default();
        assert_eq!(classify("file:a|b", &c), Literal::File("a|b"));
        assert_eq!(classify("keccak256:1|2", &c), Literal::Keccak256("1|2"));
    }

    #[test]
    fn test_concat_wins_over_simple_forms() {
        let c = InterpreterConfig::default();
        assert_eq!(classify("str:a|b", &c), Literal::Concat("str:a|b"));
        assert_eq!(classify("address:a|1", &c), Literal::Concat("address:a|1"));
        assert_eq!(classify("|", &c), Literal::Concat("|"));
    }

    #[test]
    fn test_string_prefix_wins_over_address_and_numbers() {
        let c = InterpreterConfig::default();
        assert_eq!(classify("str:address:x", &c), Literal::Ascii("address:x"));
        assert_eq!(classify("str:u8:1", &c), Literal::Ascii("u8:1"));
        assert_eq!(classify("str:", &c), Literal::Ascii(""));
    }

    #[test]
    fn test_custom_string_prefixes() {
        let c = InterpreterConfig {
            string_prefixes: vec!["s:".into()],
            ..InterpreterConfig::default()
        };
        assert_eq!(classify("s:abc", &c), Literal::Ascii("abc"));
        assert_eq!(classify("str:abc", &c), Literal::Number("str:abc"));
    }
}
