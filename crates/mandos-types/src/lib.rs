//! Shared types for the Mandos value tools.
//!
//! This crate defines the ordered value tree that fixture documents are
//! loaded into, together with the JSON loader and writer that keep object
//! keys and list items in document order.

mod error;
pub mod json;
mod value;

pub use error::{TreeError, TreeResult};
pub use value::OrderedValue;
