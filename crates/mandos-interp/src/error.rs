//! Interpreter error types.

use std::fmt;

use mandos_types::TreeError;
use thiserror::Error;

use crate::address::AddressError;
use crate::hash::HashError;
use crate::resolver::ResolveError;

/// Numeric base a literal was parsed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberBase {
    Hex,
    Binary,
    Decimal,
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Binary => write!(f, "binary"),
            Self::Decimal => write!(f, "base 10"),
        }
    }
}

/// Coarse error classification, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingFileResolver,
    UnresolvedFile,
    HashFailure,
    MalformedNumber,
    DoesNotFit,
    InvalidAddress,
    UnsupportedSubtree,
    InvalidDocument,
}

/// Errors raised while turning value expressions into bytes.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// A `file:` literal with no file resolver configured.
    #[error("cannot resolve `file:{name}`: no file resolver provided")]
    MissingFileResolver { name: String },

    /// The file resolver could not produce bytes for a logical name.
    #[error("cannot resolve `file:{name}`")]
    UnresolvedFile {
        name: String,
        #[source]
        source: ResolveError,
    },

    /// The argument of a `keccak256:` literal failed to interpret.
    #[error("cannot parse keccak256 argument `{expr}`")]
    HashFailure {
        expr: String,
        #[source]
        source: Box<InterpretError>,
    },

    /// The hash provider failed on an interpreted `keccak256:` argument.
    #[error("error computing keccak256 of `{expr}`")]
    HashComputation {
        expr: String,
        #[source]
        source: HashError,
    },

    /// Text under a numeric rule does not parse in its base.
    #[error("could not parse {base} value: {literal}")]
    MalformedNumber { literal: String, base: NumberBase },

    /// A `+` or `-` under an unsigned fixed-width marker, such as `u8:-1`.
    #[error("unsigned literal {literal} cannot carry a sign")]
    UnexpectedSign { literal: String },

    /// A fixed-width literal whose value needs more than `width` bytes.
    #[error("representation of {literal} does not fit in {width} bytes")]
    DoesNotFit { literal: String, width: usize },

    /// The address codec rejected an `address:` name.
    #[error("cannot derive address from `address:{name}`")]
    Address {
        name: String,
        #[source]
        source: AddressError,
    },

    /// A tree node that is not a value expression.
    #[error("cannot interpret {kind} subtree as value")]
    UnsupportedSubtree { kind: &'static str },

    /// The fixture document could not be loaded.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl InterpretError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFileResolver { .. } => ErrorKind::MissingFileResolver,
            Self::UnresolvedFile { .. } => ErrorKind::UnresolvedFile,
            Self::HashFailure { .. } | Self::HashComputation { .. } => ErrorKind::HashFailure,
            Self::MalformedNumber { .. } | Self::UnexpectedSign { .. } => ErrorKind::MalformedNumber,
            Self::DoesNotFit { .. } => ErrorKind::DoesNotFit,
            Self::Address { .. } => ErrorKind::InvalidAddress,
            Self::UnsupportedSubtree { .. } => ErrorKind::UnsupportedSubtree,
            Self::Tree(_) => ErrorKind::InvalidDocument,
        }
    }

    /// The innermost interpreter error, following `keccak256:` nesting.
    pub fn root_cause(&self) -> &InterpretError {
        match self {
            Self::HashFailure { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result alias for interpreter operations.
pub type InterpretResult<T> = Result<T, InterpretError>;
