use crate::high::Schema;
use crate::loc::SourcePosition;
use crate::low;
use crate::low::BuildError;
use crate::node::NodeRef;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use std::sync::Arc;
use std::sync::OnceLock;

/// High-level handle to a lazily built [`Schema`].
///
/// Wraps a [`low::SchemaProxy`] and has the same at-most-once contract: the
/// high schema is converted from the low one on first access and cached.
/// Clones share the cache.
#[derive(Clone)]
pub struct SchemaProxy {
    low: Arc<low::SchemaProxy>,
    schema: Arc<OnceLock<Result<Arc<Schema>, BuildError>>>,
}
impl SchemaProxy {
    pub fn new(low: Arc<low::SchemaProxy>) -> Self {
        Self {
            low,
            schema: Arc::new(OnceLock::new()),
        }
    }

    pub fn schema(&self) -> Result<Arc<Schema>, BuildError> {
        self.schema
            .get_or_init(|| {
                self.low.schema().map(|low| Arc::new(Schema::from_low(low)))
            })
            .clone()
    }

    pub fn is_reference(&self) -> bool {
        self.low.is_reference()
    }

    pub fn reference(&self) -> Option<&str> {
        self.low.reference()
    }

    pub fn is_circular(&self) -> bool {
        self.low.is_circular()
    }

    pub fn node(&self) -> NodeRef {
        self.low.node()
    }

    pub fn position(&self) -> SourcePosition {
        self.low.position()
    }

    pub fn low(&self) -> &Arc<low::SchemaProxy> {
        &self.low
    }
}
impl std::fmt::Debug for SchemaProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SchemaProxy").field(&self.low).finish()
    }
}
impl PartialEq for SchemaProxy {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low
    }
}

/// References serialize as `{"$ref": pointer}`; inline schemas serialize in
/// full (`null` if they failed to build).
impl Serialize for SchemaProxy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(reference) = self.reference() {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry(crate::node::REF_KEY, reference)?;
            return map.end();
        }
        match self.schema() {
            Ok(schema) => schema.serialize(serializer),
            Err(_) => serializer.serialize_none(),
        }
    }
}
