use crate::Value;
use crate::low::BuildContext;
use crate::low::KeyReference;
use crate::low::ValueReference;
use crate::node::NodeType;
use crate::node::NodeView;
use indexmap::IndexMap;
use std::sync::Arc;

/// Decoding of leaf values (scalars, lists and maps of scalars) from a node.
///
/// Implementations report problems to the [`BuildContext`] and return `None`
/// so that the enclosing object is still produced with the field left empty.
/// References have already been followed by the time `from_node` is called.
pub trait FromNode: Sized {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self>;
}

impl FromNode for String {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        match node.as_str() {
            Some(str) => Some(str.to_string()),
            None => {
                ctx.report_structural(field, NodeType::Scalar, node);
                None
            },
        }
    }
}

impl FromNode for bool {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        let Some(scalar) = node.as_scalar() else {
            ctx.report_structural(field, NodeType::Scalar, node);
            return None;
        };
        let value = scalar.as_bool();
        if value.is_none() {
            ctx.report_scalar(field, "a boolean", node);
        }
        value
    }
}

impl FromNode for i64 {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        let Some(scalar) = node.as_scalar() else {
            ctx.report_structural(field, NodeType::Scalar, node);
            return None;
        };
        let value = scalar.as_i64();
        if value.is_none() {
            ctx.report_scalar(field, "an integer", node);
        }
        value
    }
}

impl FromNode for f64 {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        let Some(scalar) = node.as_scalar() else {
            ctx.report_structural(field, NodeType::Scalar, node);
            return None;
        };
        let value = scalar.as_f64();
        if value.is_none() {
            ctx.report_scalar(field, "a number", node);
        }
        value
    }
}

/// Free-form values (`example`, `default`, extensions) are carried verbatim.
impl FromNode for Value {
    fn from_node<'a>(
        _ctx: &mut BuildContext<'a>,
        _field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        Some(Value::from_node(node))
    }
}

impl<T: FromNode> FromNode for Arc<T> {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        T::from_node(ctx, field, node).map(Arc::new)
    }
}

impl<T: FromNode> FromNode for Vec<ValueReference<T>> {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        if !node.is_sequence() {
            ctx.report_structural(field, NodeType::Sequence, node);
            return None;
        }

        let mut items = Vec::with_capacity(node.len());
        for (idx, item) in node.items().enumerate() {
            if let Some(value) = ctx.decode::<T>(&format!("{field}[{idx}]"), item) {
                items.push(value);
            }
        }
        Some(items)
    }
}

impl<T: FromNode> FromNode for IndexMap<KeyReference<String>, ValueReference<T>> {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        if !node.is_mapping() {
            ctx.report_structural(field, NodeType::Mapping, node);
            return None;
        }

        let mut map = IndexMap::with_capacity(node.len());
        for (key, value) in node.entries() {
            let name = key.as_str().unwrap_or_default();
            if let Some(value) = ctx.decode::<T>(&format!("{field}.{name}"), value) {
                map.insert(
                    KeyReference::new(name.to_string(), key.node_ref(), key.position()),
                    value,
                );
            }
        }
        Some(map)
    }
}
