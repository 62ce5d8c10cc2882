use crate::Value;
use crate::low::Build;
use crate::low::BuildContext;
use crate::low::BuildError;
use crate::low::Extensions;
use crate::low::FromNode;
use crate::low::KeyReference;
use crate::low::NodeReference;
use crate::low::ObjectBuilder;
use crate::low::SchemaOrBool;
use crate::low::SchemaProxy;
use crate::low::ValueReference;
use crate::node::NodeRef;
use crate::node::NodeType;
use crate::node::NodeView;
use indexmap::IndexMap;
use std::sync::Arc;

/// The `type` keyword: a single type name or (3.1) a list of them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SchemaTypes(pub Vec<String>);
impl SchemaTypes {
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|type_name| type_name == name)
    }

    pub fn names(&self) -> &[String] {
        self.0.as_slice()
    }
}
impl FromNode for SchemaTypes {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        if let Some(name) = node.as_str() {
            return Some(SchemaTypes(vec![name.to_string()]));
        }
        if !node.is_sequence() {
            ctx.report_structural(field, NodeType::Scalar, node);
            return None;
        }

        let mut names = vec![];
        for item in node.items() {
            match item.as_str() {
                Some(name) => names.push(name.to_string()),
                None => ctx.report_structural(field, NodeType::Scalar, item),
            }
        }
        Some(SchemaTypes(names))
    }
}

/// Low-level Schema Object.
///
/// Nested schemas are held as [`SchemaProxy`] handles and are only built
/// when asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub additional_properties: Option<NodeReference<SchemaOrBool>>,
    pub all_of: Option<NodeReference<Vec<ValueReference<Arc<SchemaProxy>>>>>,
    pub any_of: Option<NodeReference<Vec<ValueReference<Arc<SchemaProxy>>>>>,
    pub default: Option<NodeReference<Value>>,
    pub deprecated: Option<NodeReference<bool>>,
    pub description: Option<NodeReference<String>>,
    pub discriminator: Option<NodeReference<Value>>,
    pub enum_values: Option<NodeReference<Vec<ValueReference<Value>>>>,
    pub example: Option<NodeReference<Value>>,
    pub exclusive_maximum: Option<NodeReference<Value>>,
    pub exclusive_minimum: Option<NodeReference<Value>>,
    pub extensions: Extensions,
    pub external_docs: Option<NodeReference<Value>>,
    pub format: Option<NodeReference<String>>,
    pub items: Option<NodeReference<Arc<SchemaProxy>>>,
    pub max_items: Option<NodeReference<i64>>,
    pub max_length: Option<NodeReference<i64>>,
    pub max_properties: Option<NodeReference<i64>>,
    pub maximum: Option<NodeReference<f64>>,
    pub min_items: Option<NodeReference<i64>>,
    pub min_length: Option<NodeReference<i64>>,
    pub min_properties: Option<NodeReference<i64>>,
    pub minimum: Option<NodeReference<f64>>,
    pub multiple_of: Option<NodeReference<f64>>,
    pub not: Option<NodeReference<Arc<SchemaProxy>>>,
    pub nullable: Option<NodeReference<bool>>,
    pub one_of: Option<NodeReference<Vec<ValueReference<Arc<SchemaProxy>>>>>,
    pub pattern: Option<NodeReference<String>>,
    pub properties: Option<NodeReference<IndexMap<KeyReference<String>, ValueReference<Arc<SchemaProxy>>>>>,
    pub read_only: Option<NodeReference<bool>>,
    pub required: Option<NodeReference<Vec<ValueReference<String>>>>,
    pub schema_type: Option<NodeReference<SchemaTypes>>,
    pub title: Option<NodeReference<String>>,
    pub unique_items: Option<NodeReference<bool>>,
    pub write_only: Option<NodeReference<bool>>,
    pub xml: Option<NodeReference<Value>>,

    pub(crate) circular: bool,
    pub(crate) errors: Vec<BuildError>,
    pub(crate) node: NodeRef,
}
impl Schema {
    /// The placeholder materialized for a circular reference.
    pub fn circular_stub(node: NodeRef) -> Self {
        Self {
            additional_properties: None,
            all_of: None,
            any_of: None,
            default: None,
            deprecated: None,
            description: None,
            discriminator: None,
            enum_values: None,
            example: None,
            exclusive_maximum: None,
            exclusive_minimum: None,
            extensions: Extensions::default(),
            external_docs: None,
            format: None,
            items: None,
            max_items: None,
            max_length: None,
            max_properties: None,
            maximum: None,
            min_items: None,
            min_length: None,
            min_properties: None,
            minimum: None,
            multiple_of: None,
            not: None,
            nullable: None,
            one_of: None,
            pattern: None,
            properties: None,
            read_only: None,
            required: None,
            schema_type: None,
            title: None,
            unique_items: None,
            write_only: None,
            xml: None,
            circular: true,
            errors: vec![],
            node,
        }
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }

    pub fn property(&self, name: &str) -> Option<&Arc<SchemaProxy>> {
        self.properties
            .as_ref()
            .and_then(|properties| properties.value().get(name))
            .map(|proxy| proxy.value())
    }

    /// Every nested schema of this schema, labeled by the keyword path that
    /// leads to it (`properties.name`, `items`, `allOf[0]`, ...).
    pub fn nested(&self) -> Vec<(String, &Arc<SchemaProxy>)> {
        let mut nested = vec![];
        if let Some(properties) = &self.properties {
            for (name, proxy) in properties.value() {
                nested.push((format!("properties.{}", name.as_str()), proxy.value()));
            }
        }
        if let Some(items) = &self.items {
            nested.push(("items".to_string(), items.value()));
        }
        for (keyword, list) in [("allOf", &self.all_of), ("anyOf", &self.any_of), ("oneOf", &self.one_of)] {
            if let Some(list) = list {
                for (idx, proxy) in list.value().iter().enumerate() {
                    nested.push((format!("{keyword}[{idx}]"), proxy.value()));
                }
            }
        }
        if let Some(not) = &self.not {
            nested.push(("not".to_string(), not.value()));
        }
        if let Some(additional) = &self.additional_properties {
            if let SchemaOrBool::Schema(proxy) = additional.value() {
                nested.push(("additionalProperties".to_string(), proxy));
            }
        }
        nested
    }
}
impl Build for Schema {
    const NAME: &'static str = "Schema";

    const FIELDS: &'static [&'static str] = &[
        "additionalProperties",
        "allOf",
        "anyOf",
        "default",
        "deprecated",
        "description",
        "discriminator",
        "enum",
        "example",
        "exclusiveMaximum",
        "exclusiveMinimum",
        "externalDocs",
        "format",
        "items",
        "maxItems",
        "maxLength",
        "maxProperties",
        "maximum",
        "minItems",
        "minLength",
        "minProperties",
        "minimum",
        "multipleOf",
        "not",
        "nullable",
        "oneOf",
        "pattern",
        "properties",
        "readOnly",
        "required",
        "title",
        "type",
        "uniqueItems",
        "writeOnly",
        "xml",
    ];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self {
        let mut schema = Self {
            additional_properties: builder.schema_or_bool("additionalProperties"),
            all_of: builder.schema_list("allOf"),
            any_of: builder.schema_list("anyOf"),
            default: builder.field("default"),
            deprecated: builder.field("deprecated"),
            description: builder.field("description"),
            discriminator: builder.field("discriminator"),
            enum_values: builder.field("enum"),
            example: builder.field("example"),
            exclusive_maximum: builder.field("exclusiveMaximum"),
            exclusive_minimum: builder.field("exclusiveMinimum"),
            extensions: Extensions::default(),
            external_docs: builder.field("externalDocs"),
            format: builder.field("format"),
            items: builder.schema("items"),
            max_items: builder.field("maxItems"),
            max_length: builder.field("maxLength"),
            max_properties: builder.field("maxProperties"),
            maximum: builder.field("maximum"),
            min_items: builder.field("minItems"),
            min_length: builder.field("minLength"),
            min_properties: builder.field("minProperties"),
            minimum: builder.field("minimum"),
            multiple_of: builder.field("multipleOf"),
            not: builder.schema("not"),
            nullable: builder.field("nullable"),
            one_of: builder.schema_list("oneOf"),
            pattern: builder.field("pattern"),
            properties: builder.schema_map("properties"),
            read_only: builder.field("readOnly"),
            required: builder.field("required"),
            schema_type: builder.field("type"),
            title: builder.field("title"),
            unique_items: builder.field("uniqueItems"),
            write_only: builder.field("writeOnly"),
            xml: builder.field("xml"),
            circular: false,
            errors: vec![],
            node: builder.node_ref(),
        };
        (schema.extensions, schema.errors) = builder.finish();
        schema
    }
}
