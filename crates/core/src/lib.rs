//! Core types and traits for lambdava
//!
//! This crate defines the value types of the kit:
//! - ObjectsPair: immutable generic pair whose elements may be absent
//! - DoublesPair, IntDoublePair, LongDoublePair: unboxed primitive pairs
//! - AnyPair: closed enum over every pair variant
//! - Tuple2: contract shared by the pair family
//! - SlotEq: element equality used by generic pairs
//! - Element: dynamic element value for mixed pairs and lists
//! - Function2: two-argument function abstraction
//! - Blob codec: version-tagged bincode encoding
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod blob;
pub mod element;
pub mod error;
pub mod family;
pub mod function;
pub mod numeric;
pub mod pair;

// Re-export commonly used types and traits
pub use blob::{from_blob, to_blob, SerialVersion};
pub use element::Element;
pub use error::{Error, Result};
pub use family::AnyPair;
pub use function::Function2;
pub use numeric::{DoublesPair, IntDoublePair, LongDoublePair};
pub use pair::{combine_hashes, element_hash, ObjectsPair, SlotEq, Tuple2, ABSENT};
