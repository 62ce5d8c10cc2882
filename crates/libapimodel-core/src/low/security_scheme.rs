use crate::low::Build;
use crate::low::BuildError;
use crate::low::Extensions;
use crate::low::NodeReference;
use crate::low::OAuthFlows;
use crate::low::ObjectBuilder;
use crate::node::NodeRef;
use std::sync::Arc;

/// Low-level Security Scheme Object.
#[derive(Clone, Debug, PartialEq)]
pub struct SecurityScheme {
    pub bearer_format: Option<NodeReference<String>>,
    pub description: Option<NodeReference<String>>,
    pub extensions: Extensions,
    pub flows: Option<NodeReference<Arc<OAuthFlows>>>,
    pub location: Option<NodeReference<String>>,
    pub name: Option<NodeReference<String>>,
    pub open_id_connect_url: Option<NodeReference<String>>,
    pub scheme: Option<NodeReference<String>>,
    pub scheme_type: Option<NodeReference<String>>,

    pub(crate) errors: Vec<BuildError>,
    pub(crate) node: NodeRef,
}
impl SecurityScheme {
    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }
}
impl Build for SecurityScheme {
    const NAME: &'static str = "SecurityScheme";

    const FIELDS: &'static [&'static str] = &[
        "bearerFormat",
        "description",
        "flows",
        "in",
        "name",
        "openIdConnectUrl",
        "scheme",
        "type",
    ];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self {
        let mut scheme = Self {
            bearer_format: builder.field("bearerFormat"),
            description: builder.field("description"),
            extensions: Extensions::default(),
            flows: builder.object("flows"),
            location: builder.field("in"),
            name: builder.field("name"),
            open_id_connect_url: builder.field("openIdConnectUrl"),
            scheme: builder.field("scheme"),
            scheme_type: builder.field("type"),
            errors: vec![],
            node: builder.node_ref(),
        };
        (scheme.extensions, scheme.errors) = builder.finish();
        scheme
    }
}
