use crate::Value;
use crate::low::Build;
use crate::low::BuildError;
use crate::low::Extensions;
use crate::low::NodeReference;
use crate::low::ObjectBuilder;
use crate::node::NodeRef;

/// Low-level Example Object.
#[derive(Clone, Debug, PartialEq)]
pub struct Example {
    pub description: Option<NodeReference<String>>,
    pub extensions: Extensions,
    pub external_value: Option<NodeReference<String>>,
    pub summary: Option<NodeReference<String>>,
    pub value: Option<NodeReference<Value>>,

    pub(crate) errors: Vec<BuildError>,
    pub(crate) node: NodeRef,
}
impl Example {
    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }
}
impl Build for Example {
    const NAME: &'static str = "Example";

    const FIELDS: &'static [&'static str] = &[
        "description",
        "externalValue",
        "summary",
        "value",
    ];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self {
        let mut example = Self {
            description: builder.field("description"),
            extensions: Extensions::default(),
            external_value: builder.field("externalValue"),
            summary: builder.field("summary"),
            value: builder.field("value"),
            errors: vec![],
            node: builder.node_ref(),
        };
        (example.extensions, example.errors) = builder.finish();
        example
    }
}
