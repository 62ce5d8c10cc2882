use crate::Value;
use crate::index::DocumentIndex;
use crate::low::BuildContext;
use crate::low::BuildError;
use crate::low::Extensions;
use crate::low::FromNode;
use crate::low::KeyReference;
use crate::low::NodeReference;
use crate::low::SchemaProxy;
use crate::low::ValueReference;
use crate::node::NodeRef;
use crate::node::NodeType;
use crate::node::NodeView;
use crate::node::REF_KEY;
use crate::loc::SourcePosition;
use indexmap::IndexMap;
use std::sync::Arc;

/// A low-level object which can be decoded from a mapping node.
pub trait Build: Sized {
    /// Name used in error messages when the object is built at the top level.
    const NAME: &'static str;

    /// Keys this object decodes. Every other key of the mapping (except
    /// `$ref`) is captured as an extension.
    const FIELDS: &'static [&'static str];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self;
}

/// Either a schema or the boolean shorthand allowed by
/// `additionalProperties`.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaOrBool {
    Bool(bool),
    Schema(Arc<SchemaProxy>),
}

/// Field-by-field decoder for one mapping node.
///
/// Each accessor looks its key up in the mapping, follows a reference if the
/// value is one, and decodes it. A field that is absent decodes to `None`
/// silently; a field that is present but malformed decodes to `None` and
/// records a [`BuildError`].
pub struct ObjectBuilder<'c, 'a> {
    ctx: &'c mut BuildContext<'a>,
    errors_start: usize,
    fields: &'static [&'static str],
    label: String,
    node: NodeView<'a>,
}
impl<'c, 'a> ObjectBuilder<'c, 'a> {
    pub(super) fn new(
        ctx: &'c mut BuildContext<'a>,
        label: &str,
        name: &'static str,
        node: NodeView<'a>,
        fields: &'static [&'static str],
    ) -> Self {
        let errors_start = ctx.errors().len();
        if !node.is_mapping() {
            let field = if label.is_empty() { name } else { label };
            ctx.report_structural(field, NodeType::Mapping, node);
        }
        Self {
            ctx,
            errors_start,
            fields,
            label: label.to_string(),
            node,
        }
    }

    pub fn index(&self) -> &'a Arc<DocumentIndex> {
        self.ctx.index()
    }

    pub fn node(&self) -> NodeView<'a> {
        self.node
    }

    pub fn node_ref(&self) -> NodeRef {
        self.node.node_ref()
    }

    pub fn position(&self) -> SourcePosition {
        self.node.position()
    }

    fn field_label(&self, key: &str) -> String {
        if self.label.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.label)
        }
    }

    fn entry(&self, key: &str) -> Option<(NodeView<'a>, NodeView<'a>)> {
        if !self.node.is_mapping() {
            return None;
        }
        self.node.get_entry(key)
    }

    /// Decodes a leaf field (scalar, list or map of scalars).
    pub fn field<T: FromNode>(&mut self, key: &str) -> Option<NodeReference<T>> {
        let (key_node, value_node) = self.entry(key)?;
        let label = self.field_label(key);
        let value = self.ctx.decode::<T>(&label, value_node)?;
        Some(NodeReference::new(key_node.node_ref(), key_node.position(), value))
    }

    /// Builds a nested object.
    pub fn object<T: Build>(&mut self, key: &str) -> Option<NodeReference<Arc<T>>> {
        let (key_node, value_node) = self.entry(key)?;
        let label = self.field_label(key);
        let value = self.ctx.build_value::<T>(&label, value_node)?;
        Some(NodeReference::new(key_node.node_ref(), key_node.position(), value))
    }

    /// Builds a map of nested objects, keyed by name in source order.
    pub fn object_map<T: Build>(
        &mut self,
        key: &str,
    ) -> Option<NodeReference<IndexMap<KeyReference<String>, ValueReference<Arc<T>>>>> {
        self.mapping_of(key, |ctx, label, node| ctx.build_value::<T>(label, node))
    }

    /// Builds a list of nested objects.
    pub fn object_list<T: Build>(
        &mut self,
        key: &str,
    ) -> Option<NodeReference<Vec<ValueReference<Arc<T>>>>> {
        self.sequence_of(key, |ctx, label, node| ctx.build_value::<T>(label, node))
    }

    /// Wraps a schema-valued field in a lazily built [`SchemaProxy`].
    pub fn schema(&mut self, key: &str) -> Option<NodeReference<Arc<SchemaProxy>>> {
        let (key_node, value_node) = self.entry(key)?;
        let value = self.ctx.schema_value(value_node);
        Some(NodeReference::new(key_node.node_ref(), key_node.position(), value))
    }

    pub fn schema_map(
        &mut self,
        key: &str,
    ) -> Option<NodeReference<IndexMap<KeyReference<String>, ValueReference<Arc<SchemaProxy>>>>> {
        self.mapping_of(key, |ctx, _label, node| Some(ctx.schema_value(node)))
    }

    pub fn schema_list(
        &mut self,
        key: &str,
    ) -> Option<NodeReference<Vec<ValueReference<Arc<SchemaProxy>>>>> {
        self.sequence_of(key, |ctx, _label, node| Some(ctx.schema_value(node)))
    }

    pub fn schema_or_bool(&mut self, key: &str) -> Option<NodeReference<SchemaOrBool>> {
        let (key_node, value_node) = self.entry(key)?;
        let flag = value_node.as_scalar().and_then(|scalar| scalar.as_bool());
        let value = match flag {
            Some(flag) => ValueReference::new(
                SchemaOrBool::Bool(flag),
                value_node.node_ref(),
                value_node.position(),
                None,
            ),
            None => {
                let schema = self.ctx.schema_value(value_node);
                ValueReference::new(
                    SchemaOrBool::Schema(Arc::clone(schema.value())),
                    schema.value_node(),
                    schema.position(),
                    schema.reference().map(str::to_string),
                )
            },
        };
        Some(NodeReference::new(key_node.node_ref(), key_node.position(), value))
    }

    fn mapping_of<T>(
        &mut self,
        key: &str,
        mut decode: impl FnMut(&mut BuildContext<'a>, &str, NodeView<'a>) -> Option<ValueReference<T>>,
    ) -> Option<NodeReference<IndexMap<KeyReference<String>, ValueReference<T>>>> {
        let (key_node, value_node) = self.entry(key)?;
        let label = self.field_label(key);
        let (target, reference) = self.ctx.resolve_value(&label, value_node)?;
        if !target.is_mapping() {
            self.ctx.report_structural(&label, NodeType::Mapping, target);
            return None;
        }

        let mut map = IndexMap::with_capacity(target.len());
        for (entry_key, entry_value) in target.entries() {
            let name = entry_key.as_str().unwrap_or_default();
            if let Some(value) = decode(self.ctx, &format!("{label}.{name}"), entry_value) {
                map.insert(
                    KeyReference::new(name.to_string(), entry_key.node_ref(), entry_key.position()),
                    value,
                );
            }
        }
        let value = ValueReference::new(map, target.node_ref(), target.position(), reference);
        Some(NodeReference::new(key_node.node_ref(), key_node.position(), value))
    }

    fn sequence_of<T>(
        &mut self,
        key: &str,
        mut decode: impl FnMut(&mut BuildContext<'a>, &str, NodeView<'a>) -> Option<ValueReference<T>>,
    ) -> Option<NodeReference<Vec<ValueReference<T>>>> {
        let (key_node, value_node) = self.entry(key)?;
        let label = self.field_label(key);
        let (target, reference) = self.ctx.resolve_value(&label, value_node)?;
        if !target.is_sequence() {
            self.ctx.report_structural(&label, NodeType::Sequence, target);
            return None;
        }

        let mut items = Vec::with_capacity(target.len());
        for (idx, item) in target.items().enumerate() {
            if let Some(value) = decode(self.ctx, &format!("{label}[{idx}]"), item) {
                items.push(value);
            }
        }
        let value = ValueReference::new(items, target.node_ref(), target.position(), reference);
        Some(NodeReference::new(key_node.node_ref(), key_node.position(), value))
    }

    /// Captures the extensions of this object and returns them along with
    /// every error raised while building it (nested objects included).
    pub fn finish(&mut self) -> (Extensions, Vec<BuildError>) {
        let mut extensions = IndexMap::new();
        if self.node.is_mapping() {
            for (key, value) in self.node.entries() {
                let name = key.as_str().unwrap_or_default();
                if name == REF_KEY || self.fields.contains(&name) {
                    continue;
                }
                extensions.insert(
                    KeyReference::new(name.to_string(), key.node_ref(), key.position()),
                    ValueReference::new(
                        Value::from_node(value),
                        value.node_ref(),
                        value.position(),
                        None,
                    ),
                );
            }
        }
        let errors = self.ctx.errors()[self.errors_start..].to_vec();
        (Extensions(extensions), errors)
    }
}
