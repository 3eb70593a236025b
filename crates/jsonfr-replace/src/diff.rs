//! # Diff Tree
//!
//! The traversal records what it did at every processed position in a
//! [`DiffNode`] tree that mirrors the document. Positions the traversal did
//! not process (skipped by policy, or without a schema) are absent from
//! objects; inside arrays every index is present so positions stay aligned.
//!
//! The tree can be rendered two ways:
//!
//! - as a plain JSON structure shaped like the document, with HTML markup
//!   at changed string leaves ([`DiffNode::render`], see [`DiffMode`]);
//! - as a flat list of [`Change`]s addressed by JSON Pointer
//!   ([`DiffNode::changes`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use jsonfr_core::JsonPointer;

/// How much of the diff tree [`DiffNode::render`] emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Only changed leaves and the containers leading to them. Arrays that
    /// contain a change keep one entry per index, unchanged entries being
    /// unmarked copies.
    #[default]
    Sparse,
    /// Every processed position. Unchanged leaves carry their original
    /// value without markup.
    Dense,
}

impl fmt::Display for DiffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sparse => "sparse",
            Self::Dense => "dense",
        })
    }
}

/// A diff mode name that is neither `sparse` nor `dense`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown diff mode '{0}', expected 'sparse' or 'dense'")]
pub struct UnknownDiffMode(pub String);

impl FromStr for DiffMode {
    type Err = UnknownDiffMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sparse" => Ok(Self::Sparse),
            "dense" => Ok(Self::Dense),
            other => Err(UnknownDiffMode(other.to_string())),
        }
    }
}

/// A string leaf where at least one replacement happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafChange {
    pub before: String,
    pub after: String,
    pub html: String,
    pub count: usize,
}

/// One node of the diff tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffNode {
    /// Processed, but nothing changed. Holds the original value.
    Unchanged(Value),
    /// A string leaf that changed.
    Changed(LeafChange),
    /// Processed object properties, in document order.
    Object {
        entries: Vec<(String, DiffNode)>,
        matches: usize,
    },
    /// One node per array element.
    Array {
        elements: Vec<DiffNode>,
        matches: usize,
    },
}

impl DiffNode {
    pub fn object(entries: Vec<(String, DiffNode)>) -> Self {
        let matches = entries.iter().map(|(_, node)| node.match_count()).sum();
        Self::Object { entries, matches }
    }

    pub fn array(elements: Vec<DiffNode>) -> Self {
        let matches = elements.iter().map(DiffNode::match_count).sum();
        Self::Array { elements, matches }
    }

    /// Total number of replaced occurrences in this subtree.
    pub fn match_count(&self) -> usize {
        match self {
            Self::Unchanged(_) => 0,
            Self::Changed(change) => change.count,
            Self::Object { matches, .. } | Self::Array { matches, .. } => *matches,
        }
    }

    /// Returns true when anything in this subtree changed.
    pub fn has_changes(&self) -> bool {
        self.match_count() > 0
    }

    /// Render as a plain JSON structure. Returns `None` when the mode
    /// leaves nothing to show for this subtree.
    pub fn render(&self, mode: DiffMode) -> Option<Value> {
        match mode {
            DiffMode::Dense => Some(self.render_dense()),
            DiffMode::Sparse => self.render_sparse(),
        }
    }

    fn render_dense(&self) -> Value {
        match self {
            Self::Unchanged(value) => value.clone(),
            Self::Changed(change) => Value::String(change.html.clone()),
            Self::Object { entries, .. } => Value::Object(
                entries
                    .iter()
                    .map(|(key, node)| (key.clone(), node.render_dense()))
                    .collect::<Map<String, Value>>(),
            ),
            Self::Array { elements, .. } => {
                Value::Array(elements.iter().map(DiffNode::render_dense).collect())
            }
        }
    }

    fn render_sparse(&self) -> Option<Value> {
        if !self.has_changes() {
            return None;
        }
        Some(match self {
            Self::Unchanged(value) => value.clone(),
            Self::Changed(change) => Value::String(change.html.clone()),
            Self::Object { entries, .. } => Value::Object(
                entries
                    .iter()
                    .filter_map(|(key, node)| node.render_sparse().map(|v| (key.clone(), v)))
                    .collect::<Map<String, Value>>(),
            ),
            // Unchanged elements keep their index as an unmarked copy.
            Self::Array { elements, .. } => Value::Array(
                elements
                    .iter()
                    .map(|node| node.render_sparse().unwrap_or_else(|| node.render_dense()))
                    .collect(),
            ),
        })
    }

    /// Flatten to the list of changed leaves, in document order.
    pub fn changes(&self) -> Vec<Change> {
        let mut out = Vec::new();
        self.collect_changes(&JsonPointer::root(), &mut out);
        out
    }

    fn collect_changes(&self, path: &JsonPointer, out: &mut Vec<Change>) {
        if !self.has_changes() {
            return;
        }
        match self {
            Self::Unchanged(_) => {}
            Self::Changed(change) => out.push(Change {
                path: path.to_string(),
                before: change.before.clone(),
                after: change.after.clone(),
                html: change.html.clone(),
                count: change.count,
            }),
            Self::Object { entries, .. } => {
                for (key, node) in entries {
                    node.collect_changes(&path.key(key), out);
                }
            }
            Self::Array { elements, .. } => {
                for (i, node) in elements.iter().enumerate() {
                    node.collect_changes(&path.index(i), out);
                }
            }
        }
    }
}

/// One changed string leaf, addressed by JSON Pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// RFC 6901 pointer to the leaf in the document.
    pub path: String,
    /// Original value.
    pub before: String,
    /// Replaced value.
    pub after: String,
    /// HTML diff fragment.
    pub html: String,
    /// Number of occurrences replaced in this leaf.
    pub count: usize,
}
