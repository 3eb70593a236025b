//! # Traversal Engine
//!
//! Walks a document and its schema in lock-step. The schema node's declared
//! kind picks the branch; the document value is only inspected to check it
//! has the shape the schema expects. Every branch returns the replaced value
//! (always complete) and an optional diff node (`None` when the position was
//! not processed).
//!
//! Inconsistent schema/document pairs never fail here. A value whose shape
//! disagrees with its schema, or which has no schema, is copied unchanged.

use serde_json::{Map, Value};

use jsonfr_core::NodeKind;
use jsonfr_schema::{resolve, Policy, SchemaKind, SchemaNode};

use crate::diff::{DiffNode, LeafChange};
use crate::matcher::{match_replace_with, DiffMarkup};

pub(crate) struct Traversal<'a> {
    pub(crate) search: &'a str,
    pub(crate) replacement: &'a str,
    pub(crate) match_whole: bool,
    pub(crate) markup: &'a DiffMarkup,
}

impl Traversal<'_> {
    pub(crate) fn visit(&self, value: &Value, schema: &SchemaNode) -> (Value, Option<DiffNode>) {
        match schema.kind() {
            SchemaKind::Object => self.visit_object(value, schema),
            SchemaKind::Array => self.visit_array(value, schema),
            SchemaKind::Leaf(_) => self.visit_leaf(value),
            SchemaKind::Untyped => (value.clone(), None),
        }
    }

    fn visit_object(&self, value: &Value, schema: &SchemaNode) -> (Value, Option<DiffNode>) {
        let Some(map) = value.as_object() else {
            return mismatch(value, NodeKind::Object);
        };

        let mut replaced = Map::new();
        let mut entries = Vec::new();

        for (key, child) in map {
            let Some(child_schema) = schema.property(key) else {
                replaced.insert(key.clone(), child.clone());
                continue;
            };
            match resolve(child_schema, Some(key)) {
                Policy::Skip(reason) => {
                    tracing::trace!(key = %key, %reason, "skipping property");
                    replaced.insert(key.clone(), child.clone());
                }
                Policy::Process => {
                    let (child_replaced, child_diff) = self.visit(child, child_schema);
                    replaced.insert(key.clone(), child_replaced);
                    if let Some(node) = child_diff {
                        entries.push((key.clone(), node));
                    }
                }
            }
        }

        (Value::Object(replaced), Some(DiffNode::object(entries)))
    }

    fn visit_array(&self, value: &Value, schema: &SchemaNode) -> (Value, Option<DiffNode>) {
        let Some(elements) = value.as_array() else {
            return mismatch(value, NodeKind::Array);
        };
        let Some(items) = schema.items() else {
            return (value.clone(), None);
        };
        if let Policy::Skip(reason) = resolve(items, None) {
            tracing::trace!(%reason, len = elements.len(), "skipping array items");
            return (value.clone(), None);
        }

        let mut replaced = Vec::with_capacity(elements.len());
        let mut diffs = Vec::with_capacity(elements.len());
        for element in elements {
            let (element_replaced, element_diff) = self.visit(element, items);
            diffs.push(element_diff.unwrap_or_else(|| DiffNode::Unchanged(element.clone())));
            replaced.push(element_replaced);
        }

        (Value::Array(replaced), Some(DiffNode::array(diffs)))
    }

    fn visit_leaf(&self, value: &Value) -> (Value, Option<DiffNode>) {
        let Some(text) = value.as_str() else {
            return (value.clone(), None);
        };
        let result = match_replace_with(
            text,
            self.search,
            self.replacement,
            self.match_whole,
            self.markup,
        );
        if !result.is_match() {
            return (value.clone(), Some(DiffNode::Unchanged(value.clone())));
        }
        let html = result.diff.unwrap_or_default();
        (
            Value::String(result.replaced.clone()),
            Some(DiffNode::Changed(LeafChange {
                before: text.to_string(),
                after: result.replaced,
                html,
                count: result.count,
            })),
        )
    }
}

fn mismatch(value: &Value, expected: NodeKind) -> (Value, Option<DiffNode>) {
    tracing::debug!(
        %expected,
        found = %NodeKind::of(value),
        "schema and document disagree, passing value through"
    );
    (value.clone(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(value: &Value, schema: &SchemaNode) -> (Value, Option<DiffNode>) {
        let markup = DiffMarkup::default();
        let traversal = Traversal {
            search: "value",
            replacement: "replacement",
            match_whole: false,
            markup: &markup,
        };
        traversal.visit(value, schema)
    }

    #[test]
    fn keys_without_schema_pass_through_and_are_not_diffed() {
        let schema = SchemaNode::object([("a", SchemaNode::string())]);
        let (replaced, diff) = run(&json!({"a": "valueA", "extra": "valueX"}), &schema);
        assert_eq!(replaced, json!({"a": "replacementA", "extra": "valueX"}));
        let diff = diff.unwrap();
        let rendered = diff.render(crate::DiffMode::Dense).unwrap();
        assert!(rendered.get("extra").is_none());
        assert!(rendered.get("a").is_some());
    }

    #[test]
    fn document_key_order_is_preserved() {
        let schema = SchemaNode::object([
            ("z", SchemaNode::string()),
            ("a", SchemaNode::string()),
            ("m", SchemaNode::string()),
        ]);
        let (replaced, _) = run(&json!({"z": "1", "a": "value", "m": "3"}), &schema);
        let keys: Vec<&String> = replaced.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn object_schema_on_string_passes_through() {
        let schema = SchemaNode::object([("a", SchemaNode::object([("b", SchemaNode::string())]))]);
        let (replaced, diff) = run(&json!({"a": "value"}), &schema);
        assert_eq!(replaced, json!({"a": "value"}));
        assert_eq!(diff.unwrap().render(crate::DiffMode::Dense), Some(json!({})));
    }

    #[test]
    fn array_without_items_passes_through() {
        let schema = SchemaNode::from_value(&json!({"type": "array"})).unwrap();
        let (replaced, diff) = run(&json!(["value"]), &schema);
        assert_eq!(replaced, json!(["value"]));
        assert!(diff.is_none());
    }

    #[test]
    fn disabled_items_skip_every_element() {
        let schema = SchemaNode::array(SchemaNode::string().disabled());
        let (replaced, diff) = run(&json!(["value1", "value2"]), &schema);
        assert_eq!(replaced, json!(["value1", "value2"]));
        assert!(diff.is_none());
    }

    #[test]
    fn hidden_items_skip_every_element() {
        let schema = SchemaNode::array(SchemaNode::string().hidden());
        let (replaced, diff) = run(&json!(["value1", "value2"]), &schema);
        assert_eq!(replaced, json!(["value1", "value2"]));
        assert!(diff.is_none());
    }

    #[test]
    fn non_string_leaves_are_untouched() {
        let schema = SchemaNode::array(SchemaNode::leaf("number"));
        let (replaced, diff) = run(&json!([1, 2.5, null, true]), &schema);
        assert_eq!(replaced, json!([1, 2.5, null, true]));
        let diff = diff.unwrap();
        assert!(!diff.has_changes());
        assert_eq!(diff.render(crate::DiffMode::Dense), Some(json!([1, 2.5, null, true])));
    }

    #[test]
    fn untyped_schema_passes_through() {
        let schema = SchemaNode::object([("a", SchemaNode::default())]);
        let (replaced, diff) = run(&json!({"a": "value"}), &schema);
        assert_eq!(replaced, json!({"a": "value"}));
        assert_eq!(diff.unwrap().match_count(), 0);
    }
}
