use crate::Value;
use crate::high::HighModel;
use crate::high::SchemaProxy;
use crate::high::convert;
use crate::low;
use indexmap::IndexMap;
use inherent::inherent;
use serde::Serialize;
use std::sync::Arc;

/// Either a schema or the boolean shorthand allowed by
/// `additionalProperties`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaOrBool {
    Bool(bool),
    Schema(SchemaProxy),
}

/// High-level Schema Object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_properties: Option<SchemaOrBool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    all_of: Vec<SchemaProxy>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    any_of: Vec<SchemaProxy>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    circular: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    enum_values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_maximum: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_minimum: Option<Value>,
    #[serde(flatten)]
    extensions: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<SchemaProxy>,
    #[serde(skip)]
    low: Arc<low::Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    not: Option<SchemaProxy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nullable: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    one_of: Vec<SchemaProxy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    properties: IndexMap<String, SchemaProxy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    read_only: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty")]
    types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unique_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    write_only: Option<bool>,
}
#[inherent]
impl HighModel for Schema {
    type Low = low::Schema;

    pub fn from_low(low: Arc<low::Schema>) -> Self {
        let additional_properties = low.additional_properties.as_ref().map(|field| {
            match field.value() {
                low::SchemaOrBool::Bool(flag) => SchemaOrBool::Bool(*flag),
                low::SchemaOrBool::Schema(proxy) =>
                    SchemaOrBool::Schema(SchemaProxy::new(Arc::clone(proxy))),
            }
        });

        Self {
            additional_properties,
            all_of: convert::schema_list(&low.all_of),
            any_of: convert::schema_list(&low.any_of),
            circular: low.is_circular(),
            default: convert::value(&low.default),
            deprecated: convert::value(&low.deprecated),
            description: convert::value(&low.description),
            enum_values: convert::list(&low.enum_values),
            example: convert::value(&low.example),
            exclusive_maximum: convert::value(&low.exclusive_maximum),
            exclusive_minimum: convert::value(&low.exclusive_minimum),
            extensions: convert::extensions(&low.extensions),
            format: convert::value(&low.format),
            items: convert::schema(&low.items),
            max_items: convert::value(&low.max_items),
            max_length: convert::value(&low.max_length),
            maximum: convert::value(&low.maximum),
            min_items: convert::value(&low.min_items),
            min_length: convert::value(&low.min_length),
            minimum: convert::value(&low.minimum),
            not: convert::schema(&low.not),
            nullable: convert::value(&low.nullable),
            one_of: convert::schema_list(&low.one_of),
            pattern: convert::value(&low.pattern),
            properties: convert::schema_map(&low.properties),
            read_only: convert::value(&low.read_only),
            required: convert::list(&low.required),
            title: convert::value(&low.title),
            types: convert::value(&low.schema_type)
                .map(|types| types.0)
                .unwrap_or_default(),
            unique_items: convert::value(&low.unique_items),
            write_only: convert::value(&low.write_only),
            low,
        }
    }

    pub fn low(&self) -> &low::Schema {
        &self.low
    }
}
impl Schema {
    pub fn additional_properties(&self) -> Option<&SchemaOrBool> {
        self.additional_properties.as_ref()
    }

    pub fn all_of(&self) -> &[SchemaProxy] {
        self.all_of.as_slice()
    }

    pub fn any_of(&self) -> &[SchemaProxy] {
        self.any_of.as_slice()
    }

    /// Whether this is the stub materialized for a circular reference. A
    /// circular stub has no other fields populated.
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn deprecated(&self) -> Option<bool> {
        self.deprecated
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enum_values(&self) -> &[Value] {
        self.enum_values.as_slice()
    }

    pub fn example(&self) -> Option<&Value> {
        self.example.as_ref()
    }

    pub fn exclusive_maximum(&self) -> Option<&Value> {
        self.exclusive_maximum.as_ref()
    }

    pub fn exclusive_minimum(&self) -> Option<&Value> {
        self.exclusive_minimum.as_ref()
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn items(&self) -> Option<&SchemaProxy> {
        self.items.as_ref()
    }

    pub fn max_items(&self) -> Option<i64> {
        self.max_items
    }

    pub fn max_length(&self) -> Option<i64> {
        self.max_length
    }

    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    pub fn min_items(&self) -> Option<i64> {
        self.min_items
    }

    pub fn min_length(&self) -> Option<i64> {
        self.min_length
    }

    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    pub fn not(&self) -> Option<&SchemaProxy> {
        self.not.as_ref()
    }

    pub fn nullable(&self) -> Option<bool> {
        self.nullable
    }

    pub fn one_of(&self) -> &[SchemaProxy] {
        self.one_of.as_slice()
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn properties(&self) -> &IndexMap<String, SchemaProxy> {
        &self.properties
    }

    pub fn read_only(&self) -> Option<bool> {
        self.read_only
    }

    pub fn required(&self) -> &[String] {
        self.required.as_slice()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The `type` keyword's value(s), in source order.
    pub fn types(&self) -> &[String] {
        self.types.as_slice()
    }

    pub fn unique_items(&self) -> Option<bool> {
        self.unique_items
    }

    pub fn write_only(&self) -> Option<bool> {
        self.write_only
    }

    /// Every nested schema proxy of this schema, in field order.
    pub fn nested(&self) -> Vec<&SchemaProxy> {
        let mut nested: Vec<&SchemaProxy> = self.properties.values().collect();
        nested.extend(self.items.iter());
        nested.extend(self.all_of.iter());
        nested.extend(self.any_of.iter());
        nested.extend(self.one_of.iter());
        nested.extend(self.not.iter());
        if let Some(SchemaOrBool::Schema(proxy)) = &self.additional_properties {
            nested.push(proxy);
        }
        nested
    }
}
