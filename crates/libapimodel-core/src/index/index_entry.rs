use crate::node::NodeRef;

/// A successfully resolved pointer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexEntry {
    pub(super) circular: bool,
    pub(super) pointer: String,
    pub(super) remote: bool,
    pub(super) sites: Vec<NodeRef>,
    pub(super) target: NodeRef,
}
impl IndexEntry {
    /// The canonical pointer (`location#fragment`) this entry is keyed by.
    pub fn pointer(&self) -> &str {
        self.pointer.as_str()
    }

    /// The node the pointer resolves to.
    ///
    /// For a circular chain of pure aliases (`A: {$ref: B}`, `B: {$ref: A}`)
    /// this is the `$ref` node at which the chain was cut.
    pub fn target(&self) -> NodeRef {
        self.target
    }

    /// Whether resolving this pointer re-entered a resolution of itself.
    /// Circular references are a recognized terminal state, not an error.
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// Whether at least one `$ref` reaches this pointer from another
    /// document.
    pub fn is_remote(&self) -> bool {
        self.remote
    }

    /// Every `$ref` node which resolved to this entry, in discovery order.
    pub fn sites(&self) -> &[NodeRef] {
        self.sites.as_slice()
    }
}

/// A `$ref` node discovered while walking a document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferenceSite {
    pub(super) node: NodeRef,
    pub(super) path: String,
    pub(super) pointer: Option<String>,
    pub(super) raw: String,
    pub(super) remote: bool,
}
impl ReferenceSite {
    /// The mapping node carrying the `$ref` key.
    pub fn node(&self) -> NodeRef {
        self.node
    }

    /// JSON-pointer path of the `$ref` node within its own document.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// The canonical pointer, or `None` if the raw text could not be parsed.
    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
    }

    /// The `$ref` value exactly as written.
    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    pub fn is_remote(&self) -> bool {
        self.remote
    }
}
