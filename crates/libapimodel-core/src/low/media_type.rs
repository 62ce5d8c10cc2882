use crate::Value;
use crate::low::Build;
use crate::low::BuildError;
use crate::low::Example;
use crate::low::Extensions;
use crate::low::KeyReference;
use crate::low::NodeReference;
use crate::low::ObjectBuilder;
use crate::low::SchemaProxy;
use crate::low::ValueReference;
use crate::node::NodeRef;
use indexmap::IndexMap;
use std::sync::Arc;

/// Low-level Media Type Object.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaType {
    pub encoding: Option<NodeReference<Value>>,
    pub example: Option<NodeReference<Value>>,
    pub examples: Option<NodeReference<IndexMap<KeyReference<String>, ValueReference<Arc<Example>>>>>,
    pub extensions: Extensions,
    pub schema: Option<NodeReference<Arc<SchemaProxy>>>,

    pub(crate) errors: Vec<BuildError>,
    pub(crate) node: NodeRef,
}
impl MediaType {
    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }
}
impl Build for MediaType {
    const NAME: &'static str = "MediaType";

    const FIELDS: &'static [&'static str] = &[
        "encoding",
        "example",
        "examples",
        "schema",
    ];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self {
        let mut media_type = Self {
            encoding: builder.field("encoding"),
            example: builder.field("example"),
            examples: builder.object_map("examples"),
            extensions: Extensions::default(),
            schema: builder.schema("schema"),
            errors: vec![],
            node: builder.node_ref(),
        };
        (media_type.extensions, media_type.errors) = builder.finish();
        media_type
    }
}
