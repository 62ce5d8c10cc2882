use crate::loc::SourcePosition;
use crate::low::ValueReference;
use crate::node::NodeRef;

/// A declared field of a low-level object: the decoded value along with both
/// the key node and the value node it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeReference<T> {
    pub(crate) key_node: NodeRef,
    pub(crate) key_position: SourcePosition,
    pub(crate) value: ValueReference<T>,
}
impl<T> NodeReference<T> {
    pub fn new(
        key_node: NodeRef,
        key_position: SourcePosition,
        value: ValueReference<T>,
    ) -> Self {
        Self {
            key_node,
            key_position,
            value,
        }
    }

    pub fn value(&self) -> &T {
        self.value.value()
    }

    pub fn value_reference(&self) -> &ValueReference<T> {
        &self.value
    }

    pub fn key_node(&self) -> NodeRef {
        self.key_node
    }

    pub fn key_position(&self) -> SourcePosition {
        self.key_position
    }

    pub fn value_node(&self) -> NodeRef {
        self.value.value_node()
    }

    pub fn value_position(&self) -> SourcePosition {
        self.value.position()
    }

    /// The canonical pointer this field's value was resolved through, if it
    /// was written as a reference.
    pub fn reference(&self) -> Option<&str> {
        self.value.reference()
    }
}
