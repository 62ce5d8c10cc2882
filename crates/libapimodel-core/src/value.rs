use crate::node::NodeView;
use crate::node::ScalarKind;
use indexmap::IndexMap;

/// A dynamically-typed document value, used wherever the model carries data
/// verbatim instead of decoding it into a declared field (extensions,
/// examples, defaults, enum members, ...).
///
/// Serializes to the equivalent JSON value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        if let Self::List(values) = self {
            Some(values.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts a node and all of its descendants verbatim. References
    /// (`$ref`) are not followed; they come out as an object with a `$ref`
    /// entry.
    pub fn from_node(node: NodeView<'_>) -> Self {
        if let Some(scalar) = node.as_scalar() {
            return match scalar.kind() {
                ScalarKind::Null => Value::Null,
                ScalarKind::Bool =>
                    scalar.as_bool().map(Value::Bool).unwrap_or(Value::Null),
                ScalarKind::Int => match scalar.as_i64() {
                    Some(value) => Value::Int(value),
                    None => Value::String(scalar.as_str().to_string()),
                },
                ScalarKind::Float => match scalar.as_f64() {
                    Some(value) => Value::Float(value),
                    None => Value::String(scalar.as_str().to_string()),
                },
                ScalarKind::String => Value::String(scalar.as_str().to_string()),
            };
        }

        if node.is_sequence() {
            Value::List(node.items().map(Value::from_node).collect())
        } else {
            Value::Object(
                node.entries()
                    .map(|(key, value)| (
                        key.as_str().unwrap_or_default().to_string(),
                        Value::from_node(value),
                    ))
                    .collect()
            )
        }
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}
