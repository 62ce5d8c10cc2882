use crate::Value;
use crate::low::Build;
use crate::low::BuildError;
use crate::low::Example;
use crate::low::Extensions;
use crate::low::KeyReference;
use crate::low::MediaType;
use crate::low::NodeReference;
use crate::low::ObjectBuilder;
use crate::low::SchemaProxy;
use crate::low::ValueReference;
use crate::node::NodeRef;
use indexmap::IndexMap;
use std::sync::Arc;

/// Low-level Parameter Object.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub allow_empty_value: Option<NodeReference<bool>>,
    pub allow_reserved: Option<NodeReference<bool>>,
    pub content: Option<NodeReference<IndexMap<KeyReference<String>, ValueReference<Arc<MediaType>>>>>,
    pub deprecated: Option<NodeReference<bool>>,
    pub description: Option<NodeReference<String>>,
    pub example: Option<NodeReference<Value>>,
    pub examples: Option<NodeReference<IndexMap<KeyReference<String>, ValueReference<Arc<Example>>>>>,
    pub explode: Option<NodeReference<bool>>,
    pub extensions: Extensions,
    pub location: Option<NodeReference<String>>,
    pub name: Option<NodeReference<String>>,
    pub required: Option<NodeReference<bool>>,
    pub schema: Option<NodeReference<Arc<SchemaProxy>>>,
    pub style: Option<NodeReference<String>>,

    pub(crate) errors: Vec<BuildError>,
    pub(crate) node: NodeRef,
}
impl Parameter {
    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }

    /// Looks up one of this parameter's media types by name.
    pub fn find_content(&self, media_type: &str) -> Option<&ValueReference<Arc<MediaType>>> {
        self.content.as_ref()?.value().get(media_type)
    }
}
impl Build for Parameter {
    const NAME: &'static str = "Parameter";

    const FIELDS: &'static [&'static str] = &[
        "allowEmptyValue",
        "allowReserved",
        "content",
        "deprecated",
        "description",
        "example",
        "examples",
        "explode",
        "in",
        "name",
        "required",
        "schema",
        "style",
    ];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self {
        let mut parameter = Self {
            allow_empty_value: builder.field("allowEmptyValue"),
            allow_reserved: builder.field("allowReserved"),
            content: builder.object_map("content"),
            deprecated: builder.field("deprecated"),
            description: builder.field("description"),
            example: builder.field("example"),
            examples: builder.object_map("examples"),
            explode: builder.field("explode"),
            extensions: Extensions::default(),
            location: builder.field("in"),
            name: builder.field("name"),
            required: builder.field("required"),
            schema: builder.schema("schema"),
            style: builder.field("style"),
            errors: vec![],
            node: builder.node_ref(),
        };
        (parameter.extensions, parameter.errors) = builder.finish();
        parameter
    }
}
