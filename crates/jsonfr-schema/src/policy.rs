//! # Replace Policy
//!
//! Decides, for one schema node and the property key it was reached
//! through, whether the traversal processes the governed value or copies it
//! verbatim. Rules in precedence order:
//!
//! 1. Key `$ref` is skipped. Reference pointers are never rewritten,
//!    whatever the schema says about them.
//! 2. `x_editor_disabled: true` is skipped.
//! 3. `x_editor_hidden: true` is skipped.
//! 4. Everything else is processed.
//!
//! Array elements have no key, so only rules 2–4 apply to them, evaluated
//! once against the array's `items` node.

use std::fmt;

use crate::node::SchemaNode;

/// Reserved document key for reference pointers.
pub const REF_KEY: &str = "$ref";

/// Why a value is copied without processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The property key is `$ref`.
    Reference,
    /// The schema node sets `x_editor_disabled`.
    Disabled,
    /// The schema node sets `x_editor_hidden`.
    Hidden,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reference => "reference",
            Self::Disabled => "disabled",
            Self::Hidden => "hidden",
        })
    }
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Descend into the value and replace eligible strings.
    Process,
    /// Copy the value unchanged and leave it out of the diff.
    Skip(SkipReason),
}

/// Resolve the policy for `schema`, reached through `key` (`None` for
/// array elements and the document root).
pub fn resolve(schema: &SchemaNode, key: Option<&str>) -> Policy {
    if key == Some(REF_KEY) {
        return Policy::Skip(SkipReason::Reference);
    }
    if schema.is_disabled() {
        return Policy::Skip(SkipReason::Disabled);
    }
    if schema.is_hidden() {
        return Policy::Skip(SkipReason::Hidden);
    }
    Policy::Process
}
