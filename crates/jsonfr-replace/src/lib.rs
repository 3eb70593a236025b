//! # jsonfr-replace — Schema-Guided Find & Replace
//!
//! Replaces a literal search term in every eligible string of a JSON
//! document and reports, in the same pass, an HTML-annotated diff of what
//! changed.
//!
//! ## Components
//!
//! - **Traversal** (`traverse`) walks the document together with its
//!   [`SchemaNode`], dispatching on the schema's declared kind.
//! - **Policy** ([`jsonfr_schema::resolve`]) decides per node whether to
//!   process it or copy it verbatim (`$ref` keys, `x_editor_disabled`,
//!   `x_editor_hidden`).
//! - **Matcher** ([`match_replace`]) performs the literal replacement inside
//!   one string and renders the diff fragment.
//!
//! ## Usage
//!
//! ```
//! use jsonfr_replace::{find_replace_all, SchemaNode};
//! use serde_json::json;
//!
//! let schema = SchemaNode::object([("title", SchemaNode::string())]);
//! let outcome = find_replace_all(&json!({"title": "old"}), &schema, "old", "new", false).unwrap();
//! assert_eq!(outcome.replaced(), &json!({"title": "new"}));
//! assert_eq!(outcome.total_matches(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - The input document and schema are borrowed and never modified.
//! - The replaced document always has the input's full shape.
//! - Runs are deterministic and share no state; a [`FindReplace`] may be
//!   used from several threads at once.

pub mod diff;
pub mod matcher;
pub mod options;
mod traverse;

use serde_json::Value;

use jsonfr_core::{JsonfrError, NodeKind, ReplaceError};
use jsonfr_schema::{resolve, Policy};

pub use diff::{Change, DiffMode, DiffNode, LeafChange, UnknownDiffMode};
pub use jsonfr_schema::SchemaNode;
pub use matcher::{match_replace, match_replace_with, DiffMarkup, MatchResult};
pub use options::ReplaceOptions;

use crate::traverse::Traversal;

/// A configured find-and-replace operation.
#[derive(Debug, Clone)]
pub struct FindReplace {
    search: String,
    replacement: String,
    options: ReplaceOptions,
}

impl FindReplace {
    pub fn new(search: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replacement: replacement.into(),
            options: ReplaceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReplaceOptions) -> Self {
        self.options = options;
        self
    }

    /// Set whole-value matching.
    pub fn match_whole(mut self, match_whole: bool) -> Self {
        self.options.match_whole = match_whole;
        self
    }

    pub fn diff_mode(mut self, mode: DiffMode) -> Self {
        self.options.diff_mode = mode;
        self
    }

    pub fn options(&self) -> &ReplaceOptions {
        &self.options
    }

    /// Run against `document`, guided by `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplaceError::RootKindMismatch`] when the schema root
    /// declares `object` or `array` and the document root is something
    /// else. Mismatches below the root are not errors.
    pub fn run(&self, document: &Value, schema: &SchemaNode) -> Result<FindReplaceOutcome, JsonfrError> {
        if let Some(expected) = schema.kind().container_kind() {
            let found = NodeKind::of(document);
            if found != expected {
                return Err(ReplaceError::RootKindMismatch { expected, found }.into());
            }
        }

        let traversal = Traversal {
            search: &self.search,
            replacement: &self.replacement,
            match_whole: self.options.match_whole,
            markup: &self.options.markup,
        };

        let (replaced, diff) = match resolve(schema, None) {
            Policy::Process => traversal.visit(document, schema),
            Policy::Skip(reason) => {
                tracing::debug!(%reason, "schema root is not editable, nothing to replace");
                (document.clone(), None)
            }
        };

        let outcome = FindReplaceOutcome {
            replaced,
            diff,
            diff_mode: self.options.diff_mode,
        };
        tracing::debug!(
            matches = outcome.total_matches(),
            match_whole = self.options.match_whole,
            "find/replace complete"
        );
        Ok(outcome)
    }
}

/// Replace `search` with `replacement` in every eligible string of
/// `document`, using the default markup and sparse diff rendering.
///
/// # Errors
///
/// See [`FindReplace::run`].
pub fn find_replace_all(
    document: &Value,
    schema: &SchemaNode,
    search: &str,
    replacement: &str,
    match_whole: bool,
) -> Result<FindReplaceOutcome, JsonfrError> {
    FindReplace::new(search, replacement)
        .match_whole(match_whole)
        .run(document, schema)
}

/// The result of a [`FindReplace`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct FindReplaceOutcome {
    replaced: Value,
    diff: Option<DiffNode>,
    diff_mode: DiffMode,
}

impl FindReplaceOutcome {
    /// The replaced document.
    pub fn replaced(&self) -> &Value {
        &self.replaced
    }

    pub fn into_replaced(self) -> Value {
        self.replaced
    }

    /// The diff tree, or `None` when the root was not processed.
    pub fn diff(&self) -> Option<&DiffNode> {
        self.diff.as_ref()
    }

    /// The diff rendered with the configured [`DiffMode`].
    pub fn diff_html(&self) -> Value {
        self.render_diff(self.diff_mode)
    }

    /// The diff rendered with an explicit mode.
    ///
    /// When nothing is left to show, object roots render as `{}`, array
    /// roots as `[]`, and leaf roots as their unchanged value.
    pub fn render_diff(&self, mode: DiffMode) -> Value {
        self.diff
            .as_ref()
            .and_then(|node| node.render(mode))
            .unwrap_or_else(|| match &self.replaced {
                Value::Object(_) => Value::Object(serde_json::Map::new()),
                Value::Array(_) => Value::Array(Vec::new()),
                leaf => leaf.clone(),
            })
    }

    /// Changed string leaves, in document order.
    pub fn changes(&self) -> Vec<Change> {
        self.diff.as_ref().map(DiffNode::changes).unwrap_or_default()
    }

    /// Total occurrences replaced across the document.
    pub fn total_matches(&self) -> usize {
        self.diff.as_ref().map_or(0, DiffNode::match_count)
    }

    /// Number of string leaves that changed.
    pub fn changed_fields(&self) -> usize {
        self.changes().len()
    }

    pub fn has_changes(&self) -> bool {
        self.total_matches() > 0
    }
}
