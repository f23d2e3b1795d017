//! Sequence wrapper with sorting helpers
//!
//! - FunctionalStream: fluent, non-mutating wrapper over a `Vec`
//! - functional: entry point that wraps any sequence convertible to a `Vec`
//! - SortConfig / SortPolicy: handling of incomparable elements, loadable
//!   from `lambdava.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod stream;

pub use config::{SortConfig, SortPolicy, CONFIG_FILE_NAME};
pub use stream::{functional, FunctionalStream};
