use crate::Value;
use crate::low::Build;
use crate::low::BuildError;
use crate::low::Components;
use crate::low::Extensions;
use crate::low::NodeReference;
use crate::low::ObjectBuilder;
use crate::low::SecurityRequirement;
use crate::node::NodeRef;
use std::sync::Arc;

/// Low-level root object of an API-description document.
///
/// Only `components` and `security` are modeled in depth; the remaining
/// top-level sections are carried as verbatim [`Value`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenApi {
    pub components: Option<NodeReference<Arc<Components>>>,
    pub extensions: Extensions,
    pub external_docs: Option<NodeReference<Value>>,
    pub info: Option<NodeReference<Value>>,
    pub json_schema_dialect: Option<NodeReference<String>>,
    pub openapi: Option<NodeReference<String>>,
    pub paths: Option<NodeReference<Value>>,
    pub security: Option<NodeReference<Arc<SecurityRequirement>>>,
    pub servers: Option<NodeReference<Value>>,
    pub tags: Option<NodeReference<Value>>,
    pub webhooks: Option<NodeReference<Value>>,

    pub(crate) errors: Vec<BuildError>,
    pub(crate) node: NodeRef,
}
impl OpenApi {
    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }

    pub fn version(&self) -> Option<&str> {
        self.openapi.as_ref().map(|openapi| openapi.value().as_str())
    }
}
impl Build for OpenApi {
    const NAME: &'static str = "OpenApi";

    const FIELDS: &'static [&'static str] = &[
        "components",
        "externalDocs",
        "info",
        "jsonSchemaDialect",
        "openapi",
        "paths",
        "security",
        "servers",
        "tags",
        "webhooks",
    ];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self {
        let mut openapi = Self {
            components: builder.object("components"),
            extensions: Extensions::default(),
            external_docs: builder.field("externalDocs"),
            info: builder.field("info"),
            json_schema_dialect: builder.field("jsonSchemaDialect"),
            openapi: builder.field("openapi"),
            paths: builder.field("paths"),
            security: builder.field("security"),
            servers: builder.field("servers"),
            tags: builder.field("tags"),
            webhooks: builder.field("webhooks"),
            errors: vec![],
            node: builder.node_ref(),
        };
        (openapi.extensions, openapi.errors) = builder.finish();
        openapi
    }
}
