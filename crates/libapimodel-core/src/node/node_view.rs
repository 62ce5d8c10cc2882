use crate::loc::SourcePosition;
use crate::node::Document;
use crate::node::DocumentId;
use crate::node::Node;
use crate::node::NodeId;
use crate::node::NodeKind;
use crate::node::NodeRef;
use crate::node::NodeType;
use crate::node::REF_KEY;
use crate::node::ScalarValue;

/// A borrowed, copyable view of a single [`Node`] that knows which
/// [`Document`] it belongs to, so it can hand out views of its children and a
/// globally unique [`NodeRef`].
#[derive(Clone, Copy, Debug)]
pub struct NodeView<'a> {
    document: &'a Document,
    document_id: DocumentId,
    id: NodeId,
}
impl<'a> NodeView<'a> {
    pub fn new(
        document: &'a Document,
        document_id: DocumentId,
        id: NodeId,
    ) -> Self {
        Self {
            document,
            document_id,
            id,
        }
    }

    fn child(&self, id: NodeId) -> NodeView<'a> {
        NodeView::new(self.document, self.document_id, id)
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn location(&self) -> &'a str {
        self.document.location()
    }

    pub fn node(&self) -> &'a Node {
        self.document.node(self.id)
    }

    pub fn node_ref(&self) -> NodeRef {
        NodeRef::new(self.document_id, self.id)
    }

    pub fn node_type(&self) -> NodeType {
        self.node().node_type()
    }

    pub fn position(&self) -> SourcePosition {
        self.node().position()
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.node().kind(), NodeKind::Mapping(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.node().kind(), NodeKind::Scalar(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.node().kind(), NodeKind::Sequence(_))
    }

    pub fn as_scalar(&self) -> Option<&'a ScalarValue> {
        match self.node().kind() {
            NodeKind::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.as_scalar().map(|scalar| scalar.as_str())
    }

    /// The `(key, value)` pairs of a mapping node in source order. Empty for
    /// any other kind of node.
    pub fn entries(&self) -> impl Iterator<Item = (NodeView<'a>, NodeView<'a>)> + 'a {
        let entries: &'a [(NodeId, NodeId)] = match self.node().kind() {
            NodeKind::Mapping(entries) => entries.as_slice(),
            _ => &[],
        };
        let this = *self;
        entries.iter().map(move |(key, value)| (this.child(*key), this.child(*value)))
    }

    /// The items of a sequence node in source order. Empty for any other kind
    /// of node.
    pub fn items(&self) -> impl Iterator<Item = NodeView<'a>> + 'a {
        let items: &'a [NodeId] = match self.node().kind() {
            NodeKind::Sequence(items) => items.as_slice(),
            _ => &[],
        };
        let this = *self;
        items.iter().map(move |item| this.child(*item))
    }

    pub fn len(&self) -> usize {
        match self.node().kind() {
            NodeKind::Mapping(entries) => entries.len(),
            NodeKind::Sequence(items) => items.len(),
            NodeKind::Scalar(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up the first entry of a mapping node whose key text equals `key`.
    pub fn get_entry(&self, key: &str) -> Option<(NodeView<'a>, NodeView<'a>)> {
        self.entries().find(|(key_view, _)| key_view.as_str() == Some(key))
    }

    pub fn get(&self, key: &str) -> Option<NodeView<'a>> {
        self.get_entry(key).map(|(_, value)| value)
    }

    pub fn item(&self, index: usize) -> Option<NodeView<'a>> {
        self.items().nth(index)
    }

    /// Whether this is a mapping node carrying a `$ref` key.
    pub fn is_reference(&self) -> bool {
        self.get_entry(REF_KEY).is_some()
    }

    /// The raw pointer text of a reference node (a mapping whose `$ref` value
    /// is a scalar).
    pub fn reference(&self) -> Option<&'a str> {
        self.get(REF_KEY).and_then(|value| value.as_str())
    }
}
impl PartialEq for NodeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node_ref() == other.node_ref()
    }
}
impl Eq for NodeView<'_> {}
