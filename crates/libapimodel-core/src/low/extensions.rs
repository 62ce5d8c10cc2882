use crate::Value;
use crate::low::KeyReference;
use crate::low::ValueReference;
use indexmap::IndexMap;

/// Keys of a mapping which are not declared fields of the object built from
/// it, captured verbatim in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extensions(
    pub(crate) IndexMap<KeyReference<String>, ValueReference<Value>>,
);
impl Extensions {
    pub fn find(&self, name: &str) -> Option<&ValueReference<Value>> {
        self.0.get(name)
    }

    pub fn find_entry(
        &self,
        name: &str,
    ) -> Option<(&KeyReference<String>, &ValueReference<Value>)> {
        self.0.get_key_value(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyReference<String>, &ValueReference<Value>)> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(|key| key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops the per-entry node metadata.
    pub fn to_values(&self) -> IndexMap<String, Value> {
        self.0
            .iter()
            .map(|(key, value)| (key.value().clone(), value.value().clone()))
            .collect()
    }
}
