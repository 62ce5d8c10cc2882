use crate::Value;
use crate::high::HighModel;
use crate::high::OAuthFlows;
use crate::high::convert;
use crate::low;
use indexmap::IndexMap;
use inherent::inherent;
use serde::Serialize;
use std::sync::Arc;

/// High-level Security Scheme Object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    bearer_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(flatten)]
    extensions: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flows: Option<OAuthFlows>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip)]
    low: Arc<low::SecurityScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open_id_connect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    scheme_type: Option<String>,
}
#[inherent]
impl HighModel for SecurityScheme {
    type Low = low::SecurityScheme;

    pub fn from_low(low: Arc<low::SecurityScheme>) -> Self {
        Self {
            bearer_format: convert::value(&low.bearer_format),
            description: convert::value(&low.description),
            extensions: convert::extensions(&low.extensions),
            flows: convert::object(&low.flows),
            location: convert::value(&low.location),
            name: convert::value(&low.name),
            open_id_connect_url: convert::value(&low.open_id_connect_url),
            scheme: convert::value(&low.scheme),
            scheme_type: convert::value(&low.scheme_type),
            low,
        }
    }

    pub fn low(&self) -> &low::SecurityScheme {
        &self.low
    }
}
impl SecurityScheme {
    pub fn bearer_format(&self) -> Option<&str> {
        self.bearer_format.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn flows(&self) -> Option<&OAuthFlows> {
        self.flows.as_ref()
    }

    /// Where an `apiKey` is carried (`in`: query, header or cookie).
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn open_id_connect_url(&self) -> Option<&str> {
        self.open_id_connect_url.as_deref()
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn scheme_type(&self) -> Option<&str> {
        self.scheme_type.as_deref()
    }
}
