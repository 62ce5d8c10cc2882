use crate::Value;
use crate::high::Example;
use crate::high::HighModel;
use crate::high::MediaType;
use crate::high::SchemaProxy;
use crate::high::convert;
use crate::low;
use indexmap::IndexMap;
use inherent::inherent;
use serde::Serialize;
use std::sync::Arc;

/// High-level Parameter Object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_empty_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_reserved: Option<bool>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    content: IndexMap<String, MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    examples: IndexMap<String, Example>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explode: Option<bool>,
    #[serde(flatten)]
    extensions: IndexMap<String, Value>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip)]
    low: Arc<low::Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<SchemaProxy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<String>,
}
#[inherent]
impl HighModel for Parameter {
    type Low = low::Parameter;

    pub fn from_low(low: Arc<low::Parameter>) -> Self {
        Self {
            allow_empty_value: convert::value(&low.allow_empty_value),
            allow_reserved: convert::value(&low.allow_reserved),
            content: convert::object_map(&low.content),
            deprecated: convert::value(&low.deprecated),
            description: convert::value(&low.description),
            example: convert::value(&low.example),
            examples: convert::object_map(&low.examples),
            explode: convert::value(&low.explode),
            extensions: convert::extensions(&low.extensions),
            location: convert::value(&low.location),
            name: convert::value(&low.name),
            required: convert::value(&low.required),
            schema: convert::schema(&low.schema),
            style: convert::value(&low.style),
            low,
        }
    }

    /// The low-level object this parameter was converted from, for access
    /// to source positions and reference pointers.
    pub fn low(&self) -> &low::Parameter {
        &self.low
    }
}
impl Parameter {
    pub fn allow_empty_value(&self) -> bool {
        self.allow_empty_value.unwrap_or(false)
    }

    pub fn allow_reserved(&self) -> bool {
        self.allow_reserved.unwrap_or(false)
    }

    pub fn content(&self) -> &IndexMap<String, MediaType> {
        &self.content
    }

    pub fn deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn example(&self) -> Option<&Value> {
        self.example.as_ref()
    }

    pub fn examples(&self) -> &IndexMap<String, Example> {
        &self.examples
    }

    /// The explicit `explode` flag. `None` when unset, since the effective
    /// default depends on `style`.
    pub fn explode(&self) -> Option<bool> {
        self.explode
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    /// Where the parameter is carried (`in`: query, header, path or cookie).
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    pub fn schema(&self) -> Option<&SchemaProxy> {
        self.schema.as_ref()
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }
}
