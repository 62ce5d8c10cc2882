use crate::index::DocumentIndex;
use crate::loc::SourceLocation;
use crate::low::Build;
use crate::low::BuildError;
use crate::low::FromNode;
use crate::low::ObjectBuilder;
use crate::low::SchemaProxy;
use crate::low::ValueReference;
use crate::node::NodeRef;
use crate::node::NodeType;
use crate::node::NodeView;
use std::sync::Arc;

/// Builds the low-level object of type `T` from `node`.
///
/// If `node` is a reference, the index-resolved target is built instead.
/// The returned list holds every [`BuildError`] found along the way; the
/// object itself is always produced (fields which could not be decoded are
/// left empty).
pub fn build<T: Build>(
    index: &Arc<DocumentIndex>,
    node: NodeRef,
) -> (T, Vec<BuildError>) {
    let mut ctx = BuildContext::new(index);
    let view = ctx.view(node);
    let target = ctx.resolve_value(T::NAME, view)
        .map(|(target, _)| target)
        .unwrap_or(view);
    let object = ctx.build_in_place::<T>("", target);
    (object, ctx.into_errors())
}

/// State shared by every [`ObjectBuilder`] taking part in one build: the
/// index used to follow references and the document-wide error list.
pub struct BuildContext<'a> {
    pub(super) errors: Vec<BuildError>,
    index: &'a Arc<DocumentIndex>,
}
impl<'a> BuildContext<'a> {
    pub fn new(index: &'a Arc<DocumentIndex>) -> Self {
        Self {
            errors: vec![],
            index,
        }
    }

    pub fn index(&self) -> &'a Arc<DocumentIndex> {
        self.index
    }

    pub fn view(&self, node: NodeRef) -> NodeView<'a> {
        let index: &'a DocumentIndex = self.index;
        index.view(node)
    }

    pub fn location_of(&self, node: NodeView<'_>) -> SourceLocation {
        SourceLocation::new(node.location(), node.position())
    }

    pub fn report(&mut self, error: BuildError) {
        log::trace!("Build error: {error}");
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn into_errors(self) -> Vec<BuildError> {
        self.errors
    }

    pub fn report_structural(
        &mut self,
        field: &str,
        expected: NodeType,
        found: NodeView<'_>,
    ) {
        let location = self.location_of(found);
        self.report(BuildError::Structural {
            expected,
            field: field.to_string(),
            found: found.node_type(),
            location,
        });
    }

    pub fn report_scalar(
        &mut self,
        field: &str,
        expected: &'static str,
        found: NodeView<'_>,
    ) {
        let location = self.location_of(found);
        self.report(BuildError::Scalar {
            expected,
            field: field.to_string(),
            location,
            raw: found.as_str().unwrap_or_default().to_string(),
        });
    }

    /// Substitutes the index-resolved target for a reference node.
    ///
    /// Returns the node to decode and the canonical pointer it was reached
    /// through (`None` for inline values). Returns `None` when the reference
    /// could not be resolved (reported as
    /// [`BuildError::UnresolvedReference`]) or when it is a circular chain of
    /// aliases with nothing to decode.
    pub fn resolve_value(
        &mut self,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<(NodeView<'a>, Option<String>)> {
        if !node.is_reference() {
            return Some((node, None));
        }

        let index: &'a DocumentIndex = self.index;
        match index.resolved_reference(node.node_ref()) {
            Some(entry) => {
                let target = index.view(entry.target());
                if target.is_reference() {
                    log::debug!(
                        "`{field}` at {} is a circular chain of references \
                        through `{}`; leaving it empty.",
                        self.location_of(node),
                        entry.pointer(),
                    );
                    return None;
                }
                Some((target, Some(entry.pointer().to_string())))
            },

            None => {
                let location = self.location_of(node);
                self.report(BuildError::UnresolvedReference {
                    field: field.to_string(),
                    location,
                    pointer: node.reference().unwrap_or_default().to_string(),
                });
                None
            },
        }
    }

    /// Decodes a scalar-ish value (see [`FromNode`]), following a reference
    /// first if needed.
    pub fn decode<T: FromNode>(
        &mut self,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<ValueReference<T>> {
        let (target, reference) = self.resolve_value(field, node)?;
        let value = T::from_node(self, field, target)?;
        Some(ValueReference::new(value, target.node_ref(), target.position(), reference))
    }

    /// Builds a nested low-level object, following a reference first if
    /// needed. A value which is not a mapping leaves the field empty.
    ///
    /// Nested objects are shared so that high-level twins can hold the very
    /// object that was built.
    pub fn build_value<T: Build>(
        &mut self,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<ValueReference<Arc<T>>> {
        let (target, reference) = self.resolve_value(field, node)?;
        if !target.is_mapping() {
            self.report_structural(field, NodeType::Mapping, target);
            return None;
        }
        let value = Arc::new(self.build_in_place::<T>(field, target));
        Some(ValueReference::new(value, target.node_ref(), target.position(), reference))
    }

    /// Wraps a schema node in a [`SchemaProxy`] without materializing it.
    ///
    /// The proxy keeps the reference (if any) so that circular schemas can
    /// be cut at materialization time; resolution problems surface from
    /// [`SchemaProxy::schema()`].
    pub fn schema_value(&mut self, node: NodeView<'a>) -> ValueReference<Arc<SchemaProxy>> {
        let proxy = SchemaProxy::new(Arc::clone(self.index), node.node_ref());
        let value_node = proxy.target().unwrap_or(node.node_ref());
        let position = self.view(value_node).position();
        let reference = proxy.reference().map(str::to_string);
        ValueReference::new(Arc::new(proxy), value_node, position, reference)
    }

    pub(super) fn build_in_place<T: Build>(
        &mut self,
        field: &str,
        node: NodeView<'a>,
    ) -> T {
        let mut builder = ObjectBuilder::new(self, field, T::NAME, node, T::FIELDS);
        T::build(&mut builder)
    }
}
