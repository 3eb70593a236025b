//! # Schema Nodes
//!
//! A schema tree mirrors the shape of the documents it governs:
//!
//! - `type: "object"` nodes carry `properties`, one child per key.
//! - `type: "array"` nodes carry `items`, one child for every element.
//! - Any other `type` is a leaf policy node.
//!
//! ## Leniency
//!
//! Parsing never fails below the root. A `properties` value that is not an
//! object, an `items` value that is not an object (for example the tuple
//! form `items: [...]`), a child that is not an object, and flags that are
//! not booleans are all treated as absent. The traversal then passes the
//! affected document values through unchanged.
//!
//! A `type` given as a list (`["string", "null"]`) resolves to its first
//! entry other than `"null"`. A missing `type` leaves the node untyped.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use jsonfr_core::{NodeKind, SchemaError};

/// Keyword marking a subtree as not editable.
pub const DISABLED_KEYWORD: &str = "x_editor_disabled";

/// Keyword marking a subtree as hidden from the editor.
pub const HIDDEN_KEYWORD: &str = "x_editor_hidden";

/// The kind a schema node declares through its `type` keyword.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchemaKind {
    /// `type: "object"`.
    Object,
    /// `type: "array"`.
    Array,
    /// Any other declared type, kept verbatim (`"string"`, `"number"`, ...).
    Leaf(String),
    /// No usable `type` keyword.
    #[default]
    Untyped,
}

impl SchemaKind {
    fn from_type_keyword(value: Option<&Value>) -> Self {
        let name = match value {
            Some(Value::String(s)) => Some(s.as_str()),
            Some(Value::Array(list)) => {
                let names: Vec<&str> = list.iter().filter_map(Value::as_str).collect();
                names
                    .iter()
                    .copied()
                    .find(|n| *n != "null")
                    .or_else(|| names.first().copied())
            }
            _ => None,
        };
        match name {
            Some("object") => Self::Object,
            Some("array") => Self::Array,
            Some(other) => Self::Leaf(other.to_string()),
            None => Self::Untyped,
        }
    }

    /// The document node kind this schema kind expects, for containers.
    pub fn container_kind(&self) -> Option<NodeKind> {
        match self {
            Self::Object => Some(NodeKind::Object),
            Self::Array => Some(NodeKind::Array),
            _ => None,
        }
    }
}

/// A node in an editor schema tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaNode {
    kind: SchemaKind,
    properties: Option<BTreeMap<String, SchemaNode>>,
    items: Option<Box<SchemaNode>>,
    disabled: bool,
    hidden: bool,
}

impl SchemaNode {
    /// Parse a schema tree from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotAnObject`] when `value` is not a JSON
    /// object. Everything below the root is parsed leniently.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        Self::parse(value).ok_or(SchemaError::NotAnObject {
            found: NodeKind::of(value),
        })
    }

    fn parse(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let properties = obj.get("properties").and_then(Value::as_object).map(|props| {
            props
                .iter()
                .filter_map(|(key, child)| {
                    let node = Self::parse(child);
                    if node.is_none() {
                        tracing::debug!(property = %key, "ignoring non-object property schema");
                    }
                    node.map(|node| (key.clone(), node))
                })
                .collect()
        });

        let items = match obj.get("items") {
            Some(raw) => {
                let node = Self::parse(raw);
                if node.is_none() {
                    tracing::debug!("ignoring non-object items schema");
                }
                node.map(Box::new)
            }
            None => None,
        };

        Some(Self {
            kind: SchemaKind::from_type_keyword(obj.get("type")),
            properties,
            items,
            disabled: flag(obj.get(DISABLED_KEYWORD)),
            hidden: flag(obj.get(HIDDEN_KEYWORD)),
        })
    }

    /// An object node with the given properties.
    pub fn object<K, I>(properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SchemaNode)>,
    {
        Self {
            kind: SchemaKind::Object,
            properties: Some(properties.into_iter().map(|(k, v)| (k.into(), v)).collect()),
            ..Self::default()
        }
    }

    /// An array node whose elements are governed by `items`.
    pub fn array(items: SchemaNode) -> Self {
        Self {
            kind: SchemaKind::Array,
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// A leaf node with the given `type` name.
    pub fn leaf(type_name: impl Into<String>) -> Self {
        Self {
            kind: SchemaKind::Leaf(type_name.into()),
            ..Self::default()
        }
    }

    /// Shorthand for `leaf("string")`.
    pub fn string() -> Self {
        Self::leaf("string")
    }

    /// Returns this node with `x_editor_disabled` set.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns this node with `x_editor_hidden` set.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn kind(&self) -> &SchemaKind {
        &self.kind
    }

    /// Child schema for an object property, if declared.
    pub fn property(&self, key: &str) -> Option<&SchemaNode> {
        self.properties.as_ref()?.get(key)
    }

    /// Schema for array elements, if declared.
    pub fn items(&self) -> Option<&SchemaNode> {
        self.items.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

fn flag(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&Value> for SchemaNode {
    type Error = SchemaError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
