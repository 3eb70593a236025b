//! # jsonfr-schema — Editor Schema Model & Replace Policy
//!
//! Schemas in jsonfr are navigation guides, not validators. A schema node
//! tells the traversal which child schema governs which document value and
//! whether that value may be edited at all.
//!
//! ## Schema Model (`node`)
//!
//! [`SchemaNode`] is parsed leniently from a JSON (or YAML) value using the
//! keywords `type`, `properties`, `items`, `x_editor_disabled` and
//! `x_editor_hidden`. Malformed children degrade to "no schema here" rather
//! than failing, since editor schemas are user-authored and often
//! incomplete. Only a non-object schema root is rejected.
//!
//! ## Policy Resolver (`policy`)
//!
//! [`resolve`] maps a schema node and an optional property key to a
//! [`Policy`]. The rules are total and ordered: `$ref` keys first, then
//! the disabled flag, then the hidden flag.
//!
//! ## Crate Policy
//!
//! - Depends only on `jsonfr-core` internally.
//! - Unknown schema keywords are ignored, never rejected.

pub mod node;
pub mod policy;

pub use node::{SchemaKind, SchemaNode};
pub use policy::{resolve, Policy, SkipReason, REF_KEY};
