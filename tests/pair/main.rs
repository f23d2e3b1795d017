//! Integration tests for the pair family.

#[path = "../common/mod.rs"]
mod common;

mod rendering;
mod serialization;
