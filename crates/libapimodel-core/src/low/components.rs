use crate::Value;
use crate::low::Build;
use crate::low::BuildError;
use crate::low::Example;
use crate::low::Extensions;
use crate::low::KeyReference;
use crate::low::NodeReference;
use crate::low::ObjectBuilder;
use crate::low::Parameter;
use crate::low::SchemaProxy;
use crate::low::SecurityScheme;
use crate::low::ValueReference;
use crate::node::NodeRef;
use indexmap::IndexMap;
use std::sync::Arc;

type NamedMap<T> = IndexMap<KeyReference<String>, ValueReference<T>>;

/// Low-level Components Object: the named, reusable definitions most
/// references point into.
#[derive(Clone, Debug, PartialEq)]
pub struct Components {
    pub callbacks: Option<NodeReference<Value>>,
    pub examples: Option<NodeReference<NamedMap<Arc<Example>>>>,
    pub extensions: Extensions,
    pub headers: Option<NodeReference<Value>>,
    pub links: Option<NodeReference<Value>>,
    pub parameters: Option<NodeReference<NamedMap<Arc<Parameter>>>>,
    pub path_items: Option<NodeReference<Value>>,
    pub request_bodies: Option<NodeReference<Value>>,
    pub responses: Option<NodeReference<Value>>,
    pub schemas: Option<NodeReference<NamedMap<Arc<SchemaProxy>>>>,
    pub security_schemes: Option<NodeReference<NamedMap<Arc<SecurityScheme>>>>,

    pub(crate) errors: Vec<BuildError>,
    pub(crate) node: NodeRef,
}
impl Components {
    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }

    pub fn find_schema(&self, name: &str) -> Option<&Arc<SchemaProxy>> {
        self.schemas.as_ref()?.value().get(name).map(|schema| schema.value())
    }

    pub fn find_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.as_ref()?.value().get(name).map(|parameter| parameter.value().as_ref())
    }

    pub fn find_security_scheme(&self, name: &str) -> Option<&SecurityScheme> {
        self.security_schemes.as_ref()?.value().get(name).map(|scheme| scheme.value().as_ref())
    }
}
impl Build for Components {
    const NAME: &'static str = "Components";

    const FIELDS: &'static [&'static str] = &[
        "callbacks",
        "examples",
        "headers",
        "links",
        "parameters",
        "pathItems",
        "requestBodies",
        "responses",
        "schemas",
        "securitySchemes",
    ];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self {
        let mut components = Self {
            callbacks: builder.field("callbacks"),
            examples: builder.object_map("examples"),
            extensions: Extensions::default(),
            headers: builder.field("headers"),
            links: builder.field("links"),
            parameters: builder.object_map("parameters"),
            path_items: builder.field("pathItems"),
            request_bodies: builder.field("requestBodies"),
            responses: builder.field("responses"),
            schemas: builder.schema_map("schemas"),
            security_schemes: builder.object_map("securitySchemes"),
            errors: vec![],
            node: builder.node_ref(),
        };
        (components.extensions, components.errors) = builder.finish();
        components
    }
}
