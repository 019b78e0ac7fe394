//! The value interpreter: value expressions and ordered trees to bytes.

use std::fmt;
use std::sync::Arc;

use log::trace;
use mandos_types::{json, OrderedValue};

use crate::address::{AddressCodec, PaddedNameAddressCodec};
use crate::config::InterpreterConfig;
use crate::error::{InterpretError, InterpretResult};
use crate::hash::{HashProvider, Keccak256Hasher};
use crate::literal::{classify, Literal};
use crate::number::{interpret_fixed_width, interpret_number};
use crate::prefixes::{CONCAT_SEPARATOR, KECCAK256_PREFIX};
use crate::resolver::FileResolver;

/// Computes the bytes a fixture value stands for.
///
/// The interpreter owns no mutable state. Collaborators are shared behind
/// `Arc`, so cloning is cheap and clones may be used from several threads.
#[derive(Clone)]
pub struct ValueInterpreter {
    config: InterpreterConfig,
    file_resolver: Option<Arc<dyn FileResolver>>,
    hasher: Arc<dyn HashProvider>,
    address_codec: Arc<dyn AddressCodec>,
}

impl ValueInterpreter {
    /// Default grammar, keccak256 hashing, 32-byte padded addresses, and no
    /// file resolver.
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    pub fn with_config(config: InterpreterConfig) -> Self {
        let address_codec = PaddedNameAddressCodec::new(config.address_length, config.address_pad);
        Self {
            config,
            file_resolver: None,
            hasher: Arc::new(Keccak256Hasher),
            address_codec: Arc::new(address_codec),
        }
    }

    pub fn with_file_resolver(self, resolver: impl FileResolver + 'static) -> Self {
        self.with_shared_file_resolver(Arc::new(resolver))
    }

    pub fn with_shared_file_resolver(mut self, resolver: Arc<dyn FileResolver>) -> Self {
        self.file_resolver = Some(resolver);
        self
    }

    pub fn with_hasher(mut self, hasher: impl HashProvider + 'static) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }

    pub fn with_address_codec(mut self, codec: impl AddressCodec + 'static) -> Self {
        self.address_codec = Arc::new(codec);
        self
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn has_file_resolver(&self) -> bool {
        self.file_resolver.is_some()
    }

    // ══════════════════════════════════════════════════════════════════════
    // Trees
    // ══════════════════════════════════════════════════════════════════════

    /// Interpret a subtree.
    ///
    /// Strings are interpreted with [`Self::interpret_str`]. Lists
    /// concatenate their items, maps concatenate their values in insertion
    /// order; map keys are documentation and never evaluated. The first
    /// failing node aborts the whole tree.
    pub fn interpret_tree(&self, node: &OrderedValue) -> InterpretResult<Vec<u8>> {
        let mut out = Vec::new();
        self.interpret_tree_into(node, &mut out)?;
        Ok(out)
    }

    fn interpret_tree_into(&self, node: &OrderedValue, out: &mut Vec<u8>) -> InterpretResult<()> {
        match node {
            OrderedValue::Text(raw) => out.extend(self.interpret_str(raw)?),
            OrderedValue::Sequence(items) => {
                for item in items {
                    self.interpret_tree_into(item, out)?;
                }
            }
            OrderedValue::Mapping(pairs) => {
                for (_, value) in pairs {
                    self.interpret_tree_into(value, out)?;
                }
            }
            OrderedValue::Bool(_) => {
                return Err(InterpretError::UnsupportedSubtree {
                    kind: node.kind_name(),
                });
            }
        }
        Ok(())
    }

    /// Load a fixture fragment from JSON text and interpret it.
    pub fn interpret_json(&self, text: &str) -> InterpretResult<Vec<u8>> {
        let tree = json::load(text)?;
        self.interpret_tree(&tree)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Value expressions
    // ══════════════════════════════════════════════════════════════════════

    /// Interpret one value expression.
    ///
    /// See [`crate::literal`] for the rule order.
    pub fn interpret_str(&self, raw: &str) -> InterpretResult<Vec<u8>> {
        let literal = classify(raw, &self.config);
        trace!("interpreting {raw:?} as {}", literal.rule_name());

        match literal {
            Literal::Empty => Ok(Vec::new()),
            Literal::File(name) => self.resolve_file(name),
            Literal::Keccak256(expr) => self.keccak256(expr),
            Literal::Concat(raw) => self.concat(raw),
            Literal::Bool(false) => Ok(Vec::new()),
            Literal::Bool(true) => Ok(vec![0x01]),
            Literal::Ascii(s) => Ok(s.as_bytes().to_vec()),
            Literal::Address(name) => self.address(name),
            Literal::FixedWidth { digits, width } => interpret_fixed_width(digits, width, raw),
            Literal::Number(text) => interpret_number(text, None, raw),
        }
    }

    fn resolve_file(&self, name: &str) -> InterpretResult<Vec<u8>> {
        let resolver = self
            .file_resolver
            .as_ref()
            .ok_or_else(|| InterpretError::MissingFileResolver {
                name: name.to_string(),
            })?;
        resolver
            .resolve_file_value(name)
            .map_err(|source| InterpretError::UnresolvedFile {
                name: name.to_string(),
                source,
            })
    }

    /// `keccak256:` chains are unrolled: `keccak256:keccak256:x` interprets
    /// `x` once and hashes it twice, so nesting depth never grows the stack.
    fn keccak256(&self, expr: &str) -> InterpretResult<Vec<u8>> {
        let mut inner = expr;
        let mut depth = 1usize;
        while let Some(rest) = inner.strip_prefix(KECCAK256_PREFIX) {
            inner = rest;
            depth += 1;
        }
        trace!("keccak256 chain of depth {depth}");

        let mut data = self
            .interpret_str(inner)
            .map_err(|e| InterpretError::HashFailure {
                expr: inner.to_string(),
                source: Box::new(e),
            })?;
        for _ in 0..depth {
            let digest = self
                .hasher
                .keccak256(&data)
                .map_err(|source| InterpretError::HashComputation {
                    expr: inner.to_string(),
                    source,
                })?;
            data = digest.to_vec();
        }
        Ok(data)
    }

    fn concat(&self, raw: &str) -> InterpretResult<Vec<u8>> {
        let mut out = Vec::new();
        for part in raw.split(CONCAT_SEPARATOR) {
            out.extend(self.interpret_str(part)?);
        }
        Ok(out)
    }

    fn address(&self, name: &str) -> InterpretResult<Vec<u8>> {
        self.address_codec
            .derive_address(name.as_bytes())
            .map_err(|source| InterpretError::Address {
                name: name.to_string(),
                source,
            })
    }
}

impl Default for ValueInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValueInterpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueInterpreter")
            .field("config", &self.config)
            .field("file_resolver", &self.file_resolver.is_some())
            .finish_non_exhaustive()
    }
}
