//! Integration tests for FunctionalStream and its configuration.

#[path = "../common/mod.rs"]
mod common;

mod config_file;
mod sort_properties;
