//! Lambdava - functional-programming utility kit
//!
//! Lambdava provides a small set of value types and helpers:
//! immutable pairs, a two-argument function abstraction, and a sequence
//! wrapper with stable, non-mutating sorts.
//!
//! # Quick Start
//!
//! ```
//! use lambdava::{functional, DoublesPair, ObjectsPair};
//!
//! let entry = ObjectsPair::of("k", "v");
//! assert_eq!(entry.to_string(), "(k, v)");
//! assert_eq!(entry.to_list(), vec![Some("k"), Some("v")]);
//!
//! let sorted = functional(vec!["z", "d", "a"]).sort();
//! assert_eq!(sorted.as_list(), vec!["a", "d", "z"]);
//!
//! assert_eq!(DoublesPair::of(1.0, 2.0), DoublesPair::of(1.0, 2.0));
//! ```
//!
//! # Architecture
//!
//! - `lambdava-core`: pair family, `Element`, `Function2`, blob codec, errors
//! - `lambdava-streams`: `FunctionalStream` and its sort configuration

// Re-export the public API from the member crates
pub use lambdava_core::*;
pub use lambdava_streams::*;
