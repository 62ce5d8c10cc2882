use crate::Value;
use crate::high::HighModel;
use crate::high::convert;
use crate::low;
use indexmap::IndexMap;
use inherent::inherent;
use serde::Serialize;
use std::sync::Arc;

/// High-level Example Object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(flatten)]
    extensions: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_value: Option<String>,
    #[serde(skip)]
    low: Arc<low::Example>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}
#[inherent]
impl HighModel for Example {
    type Low = low::Example;

    pub fn from_low(low: Arc<low::Example>) -> Self {
        Self {
            description: convert::value(&low.description),
            extensions: convert::extensions(&low.extensions),
            external_value: convert::value(&low.external_value),
            summary: convert::value(&low.summary),
            value: convert::value(&low.value),
            low,
        }
    }

    pub fn low(&self) -> &low::Example {
        &self.low
    }
}
impl Example {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn external_value(&self) -> Option<&str> {
        self.external_value.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}
