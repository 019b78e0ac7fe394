//! Mandos value interpreter: fixture value expressions to canonical bytes.
//!
//! Fixture documents describe VM inputs and expected outputs as strings
//! such as `"u32:5"`, `"str:abc|0x01"` or `"keccak256:address:owner"`,
//! nested inside lists and maps. [`ValueInterpreter`] turns any such
//! subtree into the exact bytes it stands for.
//!
//! ```text
//! fixture text → mandos_types::json::load → OrderedValue → ValueInterpreter → bytes
//! ```
//!
//! File contents, hashing and address derivation are delegated to the
//! [`FileResolver`], [`HashProvider`] and [`AddressCodec`] traits.

pub mod address;
pub mod config;
pub mod error;
pub mod hash;
pub mod interpreter;
pub mod literal;
mod number;
pub mod prefixes;
pub mod resolver;

pub use address::{AddressCodec, AddressError, PaddedNameAddressCodec};
pub use config::InterpreterConfig;
pub use error::{ErrorKind, InterpretError, InterpretResult, NumberBase};
pub use hash::{HashError, HashProvider, Keccak256Hasher, HASH_LENGTH};
pub use interpreter::ValueInterpreter;
pub use literal::{classify, Literal};
pub use resolver::{DefaultFileResolver, FileResolver, MemoryFileResolver, ResolveError};

pub use mandos_types::OrderedValue;
