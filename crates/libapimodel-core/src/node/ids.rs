/// Opaque, copyable index of a [`Node`](crate::node::Node) within the arena of
/// the [`Document`](crate::node::Document) that owns it.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct NodeId(u32);
impl NodeId {
    pub(crate) fn from_raw(index: u32) -> Self {
        Self(index)
    }

    pub fn as_raw(self) -> u32 {
        self.0
    }
}

/// Opaque, copyable index of a [`Document`](crate::node::Document) registered
/// with a [`DocumentIndex`](crate::index::DocumentIndex).
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct DocumentId(u32);
impl DocumentId {
    pub(crate) fn from_raw(index: u32) -> Self {
        Self(index)
    }

    pub fn as_raw(self) -> u32 {
        self.0
    }
}

/// Globally unique handle of a node across every document known to a
/// [`DocumentIndex`](crate::index::DocumentIndex).
///
/// Node identity *is* `NodeRef` equality: two pointers which address the same
/// node (aliasing) always resolve to equal `NodeRef`s, and nothing in this
/// crate ever copies a node into a second arena slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct NodeRef {
    pub document: DocumentId,
    pub node: NodeId,
}
impl NodeRef {
    pub fn new(document: DocumentId, node: NodeId) -> Self {
        Self { document, node }
    }
}
