//! The high-level model: plain values, no node bookkeeping. Each object
//! keeps a handle to the low-level object it was converted from.

mod components;
mod convert;
mod example;
mod high_model;
mod media_type;
mod oauth_flows;
mod openapi;
mod parameter;
mod schema;
mod schema_proxy;
mod security_requirement;
mod security_scheme;

pub use components::Components;
pub use example::Example;
pub use high_model::HighModel;
pub use media_type::MediaType;
pub use oauth_flows::OAuthFlow;
pub use oauth_flows::OAuthFlows;
pub use openapi::OpenApi;
pub use parameter::Parameter;
pub use schema::Schema;
pub use schema::SchemaOrBool;
pub use schema_proxy::SchemaProxy;
pub use security_requirement::SecurityRequirement;
pub use security_scheme::SecurityScheme;
