use crate::Value;
use crate::high::Components;
use crate::high::HighModel;
use crate::high::SecurityRequirement;
use crate::high::convert;
use crate::low;
use indexmap::IndexMap;
use inherent::inherent;
use serde::Serialize;
use std::sync::Arc;

/// High-level document root.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Components>,
    #[serde(flatten)]
    extensions: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_docs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    json_schema_dialect: Option<String>,
    #[serde(skip)]
    low: Arc<low::OpenApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    openapi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    security: Option<SecurityRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    servers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhooks: Option<Value>,
}
#[inherent]
impl HighModel for OpenApi {
    type Low = low::OpenApi;

    pub fn from_low(low: Arc<low::OpenApi>) -> Self {
        Self {
            components: convert::object(&low.components),
            extensions: convert::extensions(&low.extensions),
            external_docs: convert::value(&low.external_docs),
            info: convert::value(&low.info),
            json_schema_dialect: convert::value(&low.json_schema_dialect),
            openapi: convert::value(&low.openapi),
            paths: convert::value(&low.paths),
            security: convert::object(&low.security),
            servers: convert::value(&low.servers),
            tags: convert::value(&low.tags),
            webhooks: convert::value(&low.webhooks),
            low,
        }
    }

    pub fn low(&self) -> &low::OpenApi {
        &self.low
    }
}
impl OpenApi {
    pub fn components(&self) -> Option<&Components> {
        self.components.as_ref()
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn external_docs(&self) -> Option<&Value> {
        self.external_docs.as_ref()
    }

    pub fn info(&self) -> Option<&Value> {
        self.info.as_ref()
    }

    pub fn json_schema_dialect(&self) -> Option<&str> {
        self.json_schema_dialect.as_deref()
    }

    /// The `openapi` version string.
    pub fn openapi(&self) -> Option<&str> {
        self.openapi.as_deref()
    }

    pub fn paths(&self) -> Option<&Value> {
        self.paths.as_ref()
    }

    pub fn security(&self) -> Option<&SecurityRequirement> {
        self.security.as_ref()
    }

    pub fn servers(&self) -> Option<&Value> {
        self.servers.as_ref()
    }

    pub fn tags(&self) -> Option<&Value> {
        self.tags.as_ref()
    }

    pub fn webhooks(&self) -> Option<&Value> {
        self.webhooks.as_ref()
    }
}
