//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout jsonfr. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Structural mismatches between a document and its schema are not
//!   errors. The traversal recovers locally and passes the value through.
//! - Only invalid arguments at the entry point fail, and they fail fast
//!   with the expected and actual node kinds.

use thiserror::Error;

use crate::document::NodeKind;

/// Top-level error type for jsonfr.
#[derive(Error, Debug)]
pub enum JsonfrError {
    /// The schema could not be interpreted.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The find-and-replace call was given inconsistent arguments.
    #[error("replace error: {0}")]
    Replace(#[from] ReplaceError),
}

/// Error while building a schema tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema root must be a JSON object.
    #[error("schema root must be an object, found {found}")]
    NotAnObject {
        /// Kind of the value that was supplied as schema root.
        found: NodeKind,
    },
}

/// Error raised by the find-and-replace entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    /// The document root does not have the kind the schema root declares.
    #[error("document root is {found} but the schema root declares {expected}")]
    RootKindMismatch {
        /// Kind declared by the schema root.
        expected: NodeKind,
        /// Kind of the document root.
        found: NodeKind,
    },
}
