use crate::index::DocumentIndex;
use crate::loc::SourcePosition;
use crate::low::BuildError;
use crate::low::Schema;
use crate::low::build;
use crate::node::NodeRef;
use std::sync::Arc;
use std::sync::OnceLock;
#[cfg(test)]
use std::sync::atomic::AtomicUsize;
#[cfg(test)]
use std::sync::atomic::Ordering;

/// A deferred, build-at-most-once handle to a schema.
///
/// Building a [`Schema`] eagerly would recurse forever through circular
/// schemas, so schema-valued fields hold a proxy instead. The first call to
/// [`SchemaProxy::schema()`] builds the schema from its node; every later call
/// (from any thread) returns the same cached outcome, failures included.
///
/// A proxy whose reference the index marked circular materializes to a stub
/// [`Schema`] with [`Schema::is_circular()`] set and no fields populated.
pub struct SchemaProxy {
    #[cfg(test)]
    pub(crate) build_count: AtomicUsize,
    circular: bool,
    index: Arc<DocumentIndex>,
    node: NodeRef,
    reference: Option<String>,
    schema: OnceLock<Result<Arc<Schema>, BuildError>>,
    target: Option<NodeRef>,
}
impl SchemaProxy {
    /// Creates a proxy for the schema written at `node`. If `node` is a
    /// reference, the index-resolved target is what gets built.
    pub fn new(index: Arc<DocumentIndex>, node: NodeRef) -> Self {
        let view = index.view(node);
        let (target, reference, circular) = if view.is_reference() {
            match index.resolved_reference(node) {
                Some(entry) => (
                    Some(entry.target()),
                    Some(entry.pointer().to_string()),
                    entry.is_circular() || index.view(entry.target()).is_reference(),
                ),
                None => (None, view.reference().map(str::to_string), false),
            }
        } else {
            (Some(node), None, false)
        };

        Self {
            #[cfg(test)]
            build_count: AtomicUsize::new(0),
            circular,
            index,
            node,
            reference,
            schema: OnceLock::new(),
            target,
        }
    }

    /// Materializes the schema, building it on first access.
    pub fn schema(&self) -> Result<Arc<Schema>, BuildError> {
        self.schema.get_or_init(|| self.materialize()).clone()
    }

    fn materialize(&self) -> Result<Arc<Schema>, BuildError> {
        #[cfg(test)]
        self.build_count.fetch_add(1, Ordering::SeqCst);

        let Some(target) = self.target else {
            return Err(BuildError::UnresolvedReference {
                field: "schema".to_string(),
                location: self.index.location_of(self.node),
                pointer: self.reference.clone().unwrap_or_default(),
            });
        };

        if self.circular {
            log::trace!(
                "Cutting circular schema reference `{}`.",
                self.reference.as_deref().unwrap_or_default(),
            );
            return Ok(Arc::new(Schema::circular_stub(target)));
        }

        let (schema, errors) = build::<Schema>(&self.index, target);
        if errors.is_empty() {
            Ok(Arc::new(schema))
        } else {
            Err(BuildError::Schema {
                errors,
                location: self.index.location_of(target),
            })
        }
    }

    /// Whether [`SchemaProxy::schema()`] has already been called.
    pub fn is_built(&self) -> bool {
        self.schema.get().is_some()
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// The canonical pointer this schema was written as, or the raw `$ref`
    /// text when it could not be resolved.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// The node the schema was written at (the `$ref` mapping for references).
    pub fn node(&self) -> NodeRef {
        self.node
    }

    /// The node the schema is built from.
    pub fn target(&self) -> Option<NodeRef> {
        self.target
    }

    pub fn position(&self) -> SourcePosition {
        self.index.view(self.node).position()
    }

    pub fn index(&self) -> &Arc<DocumentIndex> {
        &self.index
    }
}
impl std::fmt::Debug for SchemaProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaProxy")
            .field("node", &self.node)
            .field("reference", &self.reference)
            .field("circular", &self.circular)
            .field("built", &self.is_built())
            .finish()
    }
}
impl PartialEq for SchemaProxy {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.index, &other.index) && self.node == other.node
    }
}
