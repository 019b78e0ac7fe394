//! Interpreter configuration.
//!
//! Only the parts of the grammar that vary between fixture dialects are
//! configurable. Everything else lives in [`crate::prefixes`].

use serde::{Deserialize, Serialize};

use crate::address::{ADDRESS_LENGTH, ADDRESS_PAD};
use crate::prefixes::DEFAULT_STRING_PREFIXES;

/// Interpreter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Prefixes marking a raw ASCII string literal, tried in order.
    pub string_prefixes: Vec<String>,

    /// Length of addresses produced by the default address codec.
    pub address_length: usize,

    /// Filler byte of the default address codec.
    pub address_pad: u8,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            string_prefixes: DEFAULT_STRING_PREFIXES.iter().map(|p| p.to_string()).collect(),
            address_length: ADDRESS_LENGTH,
            address_pad: ADDRESS_PAD,
        }
    }
}

impl InterpreterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// The string prefix `raw` starts with, if any.
    pub fn string_prefix_of(&self, raw: &str) -> Option<&str> {
        self.string_prefixes
            .iter()
            .map(String::as_str)
            .find(|p| !p.is_empty() && raw.starts_with(p))
    }
}
