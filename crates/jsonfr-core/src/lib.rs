//! # jsonfr-core — Foundational Types for jsonfr
//!
//! This crate holds the small set of types every other jsonfr crate
//! shares. It depends on nothing internal.
//!
//! ## Contents
//!
//! 1. **Error hierarchy.** `JsonfrError` is the umbrella error returned by
//!    the public entry points. Each area (schema parsing, replacement) has
//!    its own `thiserror` enum that converts into it.
//!
//! 2. **`NodeKind`.** A fieldless view of a `serde_json::Value` used in
//!    diagnostics and kind-mismatch errors.
//!
//! 3. **`JsonPointer`.** RFC 6901 paths built incrementally during a
//!    traversal and reported in the flat change list.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsonfr-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod pointer;

pub use document::NodeKind;
pub use error::{JsonfrError, ReplaceError, SchemaError};
pub use pointer::JsonPointer;
