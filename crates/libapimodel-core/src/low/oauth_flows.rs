use crate::low::Build;
use crate::low::BuildError;
use crate::low::Extensions;
use crate::low::KeyReference;
use crate::low::NodeReference;
use crate::low::ObjectBuilder;
use crate::low::ValueReference;
use crate::node::NodeRef;
use indexmap::IndexMap;
use std::sync::Arc;

/// Low-level OAuth Flows Object.
#[derive(Clone, Debug, PartialEq)]
pub struct OAuthFlows {
    pub authorization_code: Option<NodeReference<Arc<OAuthFlow>>>,
    pub client_credentials: Option<NodeReference<Arc<OAuthFlow>>>,
    pub extensions: Extensions,
    pub implicit: Option<NodeReference<Arc<OAuthFlow>>>,
    pub password: Option<NodeReference<Arc<OAuthFlow>>>,

    pub(crate) errors: Vec<BuildError>,
    pub(crate) node: NodeRef,
}
impl OAuthFlows {
    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }
}
impl Build for OAuthFlows {
    const NAME: &'static str = "OAuthFlows";

    const FIELDS: &'static [&'static str] = &[
        "authorizationCode",
        "clientCredentials",
        "implicit",
        "password",
    ];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self {
        let mut flows = Self {
            authorization_code: builder.object("authorizationCode"),
            client_credentials: builder.object("clientCredentials"),
            extensions: Extensions::default(),
            implicit: builder.object("implicit"),
            password: builder.object("password"),
            errors: vec![],
            node: builder.node_ref(),
        };
        (flows.extensions, flows.errors) = builder.finish();
        flows
    }
}

/// Low-level OAuth Flow Object.
#[derive(Clone, Debug, PartialEq)]
pub struct OAuthFlow {
    pub authorization_url: Option<NodeReference<String>>,
    pub extensions: Extensions,
    pub refresh_url: Option<NodeReference<String>>,
    pub scopes: Option<NodeReference<IndexMap<KeyReference<String>, ValueReference<String>>>>,
    pub token_url: Option<NodeReference<String>>,

    pub(crate) errors: Vec<BuildError>,
    pub(crate) node: NodeRef,
}
impl OAuthFlow {
    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn node(&self) -> NodeRef {
        self.node
    }

    pub fn find_scope(&self, name: &str) -> Option<&str> {
        self.scopes
            .as_ref()?
            .value()
            .get(name)
            .map(|description| description.value().as_str())
    }
}
impl Build for OAuthFlow {
    const NAME: &'static str = "OAuthFlow";

    const FIELDS: &'static [&'static str] = &[
        "authorizationUrl",
        "refreshUrl",
        "scopes",
        "tokenUrl",
    ];

    fn build(builder: &mut ObjectBuilder<'_, '_>) -> Self {
        let mut flow = Self {
            authorization_url: builder.field("authorizationUrl"),
            extensions: Extensions::default(),
            refresh_url: builder.field("refreshUrl"),
            scopes: builder.field("scopes"),
            token_url: builder.field("tokenUrl"),
            errors: vec![],
            node: builder.node_ref(),
        };
        (flow.extensions, flow.errors) = builder.finish();
        flow
    }
}
