use crate::Value;
use crate::high::Example;
use crate::high::HighModel;
use crate::high::Parameter;
use crate::high::SchemaProxy;
use crate::high::SecurityScheme;
use crate::high::convert;
use crate::low;
use indexmap::IndexMap;
use inherent::inherent;
use serde::Serialize;
use std::sync::Arc;

/// High-level Components Object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    callbacks: Option<Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    examples: IndexMap<String, Example>,
    #[serde(flatten)]
    extensions: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<Value>,
    #[serde(skip)]
    low: Arc<low::Components>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    parameters: IndexMap<String, Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_items: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_bodies: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    responses: Option<Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    schemas: IndexMap<String, SchemaProxy>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    security_schemes: IndexMap<String, SecurityScheme>,
}
#[inherent]
impl HighModel for Components {
    type Low = low::Components;

    pub fn from_low(low: Arc<low::Components>) -> Self {
        Self {
            callbacks: convert::value(&low.callbacks),
            examples: convert::object_map(&low.examples),
            extensions: convert::extensions(&low.extensions),
            headers: convert::value(&low.headers),
            links: convert::value(&low.links),
            parameters: convert::object_map(&low.parameters),
            path_items: convert::value(&low.path_items),
            request_bodies: convert::value(&low.request_bodies),
            responses: convert::value(&low.responses),
            schemas: convert::schema_map(&low.schemas),
            security_schemes: convert::object_map(&low.security_schemes),
            low,
        }
    }

    pub fn low(&self) -> &low::Components {
        &self.low
    }
}
impl Components {
    pub fn callbacks(&self) -> Option<&Value> {
        self.callbacks.as_ref()
    }

    pub fn examples(&self) -> &IndexMap<String, Example> {
        &self.examples
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn headers(&self) -> Option<&Value> {
        self.headers.as_ref()
    }

    pub fn links(&self) -> Option<&Value> {
        self.links.as_ref()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn path_items(&self) -> Option<&Value> {
        self.path_items.as_ref()
    }

    pub fn request_bodies(&self) -> Option<&Value> {
        self.request_bodies.as_ref()
    }

    pub fn responses(&self) -> Option<&Value> {
        self.responses.as_ref()
    }

    pub fn schemas(&self) -> &IndexMap<String, SchemaProxy> {
        &self.schemas
    }

    pub fn security_schemes(&self) -> &IndexMap<String, SecurityScheme> {
        &self.security_schemes
    }
}
