use crate::loc::SourcePosition;
use crate::node::Node;
use crate::node::NodeId;
use crate::node::NodeKind;
use crate::node::ScalarKind;
use crate::node::ScalarValue;

/// A parsed document: an append-only arena of [`Node`]s, the id of its root
/// node and the location it was loaded from.
///
/// Documents are produced by a parser adapter (see
/// [`Document::from_yaml_str()`]) or assembled by hand with a
/// [`DocumentBuilder`]. Once finished, a document never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    location: String,
    nodes: Vec<Node>,
    root: NodeId,
}
impl Document {
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id was not allocated by this document.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.as_raw() as usize]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_raw() as usize)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over `(NodeId, &Node)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_raw(i as u32), node))
    }

    pub(crate) fn with_location(mut self, location: String) -> Self {
        self.location = location;
        self
    }
}

/// Incrementally assembles a [`Document`].
///
/// Children must be allocated before their parents; the parent then refers to
/// them by the returned [`NodeId`]s.
///
/// ```
/// use libapimodel_core::loc::SourcePosition;
/// use libapimodel_core::node::DocumentBuilder;
///
/// let mut builder = DocumentBuilder::new("inline.yaml");
/// let key = builder.scalar("title", SourcePosition::new(1, 1));
/// let value = builder.scalar("Petstore", SourcePosition::new(1, 8));
/// let root = builder.mapping(vec![(key, value)], SourcePosition::new(1, 1));
/// let document = builder.finish(root);
///
/// assert_eq!(document.len(), 3);
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    location: String,
    nodes: Vec<Node>,
}
impl DocumentBuilder {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            nodes: vec![],
        }
    }

    fn alloc(&mut self, kind: NodeKind, position: SourcePosition) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(Node { kind, position });
        id
    }

    /// Allocates a plain scalar whose [`ScalarKind`] is inferred from its
    /// text.
    pub fn scalar(
        &mut self,
        raw: impl Into<String>,
        position: SourcePosition,
    ) -> NodeId {
        self.alloc(NodeKind::Scalar(ScalarValue::plain(raw)), position)
    }

    /// Allocates a scalar with an explicit [`ScalarKind`] (e.g. a quoted
    /// string that merely looks like a number).
    pub fn typed_scalar(
        &mut self,
        raw: impl Into<String>,
        kind: ScalarKind,
        position: SourcePosition,
    ) -> NodeId {
        self.alloc(NodeKind::Scalar(ScalarValue::new(raw, kind)), position)
    }

    pub fn sequence(
        &mut self,
        items: Vec<NodeId>,
        position: SourcePosition,
    ) -> NodeId {
        self.alloc(NodeKind::Sequence(items), position)
    }

    pub fn mapping(
        &mut self,
        entries: Vec<(NodeId, NodeId)>,
        position: SourcePosition,
    ) -> NodeId {
        self.alloc(NodeKind::Mapping(entries), position)
    }

    pub fn finish(self, root: NodeId) -> Document {
        Document {
            location: self.location,
            nodes: self.nodes,
            root,
        }
    }
}
