use crate::loc::SourcePosition;
use crate::node::NodeRef;

/// A decoded value paired with the node it was decoded from.
///
/// When the value was written as a reference (`{$ref: ...}`), `value_node`
/// is the resolved target node and `reference` holds the canonical pointer
/// that led there. For inline values `reference` is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueReference<T> {
    pub(crate) position: SourcePosition,
    pub(crate) reference: Option<String>,
    pub(crate) value: T,
    pub(crate) value_node: NodeRef,
}
impl<T> ValueReference<T> {
    pub fn new(
        value: T,
        value_node: NodeRef,
        position: SourcePosition,
        reference: Option<String>,
    ) -> Self {
        Self {
            position,
            reference,
            value,
            value_node,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn value_node(&self) -> NodeRef {
        self.value_node
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }
}
