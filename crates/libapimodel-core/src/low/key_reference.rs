use crate::loc::SourcePosition;
use crate::node::NodeRef;
use std::borrow::Borrow;
use std::hash::Hash;
use std::hash::Hasher;

/// A decoded mapping key paired with the node it was read from.
///
/// Equality and hashing only consider the decoded value, so
/// `KeyReference<String>` can key a map that is looked up by plain `&str`
/// while still remembering where each key was written.
#[derive(Clone, Debug)]
pub struct KeyReference<T> {
    pub(crate) key_node: NodeRef,
    pub(crate) position: SourcePosition,
    pub(crate) value: T,
}
impl<T> KeyReference<T> {
    pub fn new(value: T, key_node: NodeRef, position: SourcePosition) -> Self {
        Self {
            key_node,
            position,
            value,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn key_node(&self) -> NodeRef {
        self.key_node
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }
}
impl KeyReference<String> {
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}
impl<T: PartialEq> PartialEq for KeyReference<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl<T: Eq> Eq for KeyReference<T> {}
impl<T: Hash> Hash for KeyReference<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}
impl Borrow<str> for KeyReference<String> {
    fn borrow(&self) -> &str {
        self.value.as_str()
    }
}
