//! # Document Node Kinds
//!
//! A document is any `serde_json::Value`. The find-and-replace engine never
//! mutates a document in place: it borrows the input and builds a fresh
//! output. `NodeKind` names the shape of a node without carrying its data.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The shape of a single document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Ordered mapping of string keys to values.
    Object,
    /// Ordered sequence of values.
    Array,
    /// UTF-8 string scalar.
    String,
    /// Numeric scalar.
    Number,
    /// Boolean scalar.
    Boolean,
    /// JSON `null`.
    Null,
}

impl NodeKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Null => Self::Null,
        }
    }

    /// Lowercase name, matching the JSON Schema `type` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
