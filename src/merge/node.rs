//! Shape classification of template nodes.

use serde_json::{Map, Value};

/// A mutable view of a template node, classified by shape.
pub enum Node<'a> {
    /// A mapping with a string `name` and a `value` field.
    Named { name: String, fields: &'a mut Map<String, Value> },
    Mapping(&'a mut Map<String, Value>),
    Sequence(&'a mut Vec<Value>),
    Scalar,
}

impl<'a> Node<'a> {
    pub fn classify(value: &'a mut Value) -> Self {
        match value {
            Value::Object(fields) => {
                let name = fields.get("name").and_then(Value::as_str).map(str::to_owned);
                match name {
                    Some(name) if fields.contains_key("value") => Node::Named { name, fields },
                    _ => Node::Mapping(fields),
                }
            }
            Value::Array(items) => Node::Sequence(items),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Node::Scalar,
        }
    }
}

/// Leaves are anything other than a mapping or sequence.
pub fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}
