use crate::Value;
use crate::high::Example;
use crate::high::HighModel;
use crate::high::SchemaProxy;
use crate::high::convert;
use crate::low;
use indexmap::IndexMap;
use inherent::inherent;
use serde::Serialize;
use std::sync::Arc;

/// High-level Media Type Object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    encoding: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    examples: IndexMap<String, Example>,
    #[serde(flatten)]
    extensions: IndexMap<String, Value>,
    #[serde(skip)]
    low: Arc<low::MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<SchemaProxy>,
}
#[inherent]
impl HighModel for MediaType {
    type Low = low::MediaType;

    pub fn from_low(low: Arc<low::MediaType>) -> Self {
        Self {
            encoding: convert::value(&low.encoding),
            example: convert::value(&low.example),
            examples: convert::object_map(&low.examples),
            extensions: convert::extensions(&low.extensions),
            schema: convert::schema(&low.schema),
            low,
        }
    }

    pub fn low(&self) -> &low::MediaType {
        &self.low
    }
}
impl MediaType {
    pub fn encoding(&self) -> Option<&Value> {
        self.encoding.as_ref()
    }

    pub fn example(&self) -> Option<&Value> {
        self.example.as_ref()
    }

    pub fn examples(&self) -> &IndexMap<String, Example> {
        &self.examples
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn schema(&self) -> Option<&SchemaProxy> {
        self.schema.as_ref()
    }
}
