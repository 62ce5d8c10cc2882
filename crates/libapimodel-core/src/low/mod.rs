//! The low-level model: typed objects decoded from document nodes, where
//! every field remembers the nodes (and reference, if any) it came from.

mod build_context;
mod build_error;
mod components;
mod example;
mod extensions;
mod from_node;
mod key_reference;
mod media_type;
mod node_reference;
mod oauth_flows;
mod object_builder;
mod openapi;
mod parameter;
mod schema;
mod schema_proxy;
mod security_requirement;
mod security_scheme;
mod value_reference;

pub use build_context::BuildContext;
pub use build_context::build;
pub use build_error::BuildError;
pub use components::Components;
pub use example::Example;
pub use extensions::Extensions;
pub use from_node::FromNode;
pub use key_reference::KeyReference;
pub use media_type::MediaType;
pub use node_reference::NodeReference;
pub use oauth_flows::OAuthFlow;
pub use oauth_flows::OAuthFlows;
pub use object_builder::Build;
pub use object_builder::ObjectBuilder;
pub use object_builder::SchemaOrBool;
pub use openapi::OpenApi;
pub use parameter::Parameter;
pub use schema::Schema;
pub use schema::SchemaTypes;
pub use schema_proxy::SchemaProxy;
pub use security_requirement::RequirementEntry;
pub use security_requirement::SecurityRequirement;
pub use security_scheme::SecurityScheme;
pub use value_reference::ValueReference;

#[cfg(all(test, feature = "yaml"))]
mod tests;
