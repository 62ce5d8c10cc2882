mod document;
mod ids;
#[allow(clippy::module_inception)]
mod node;
mod node_view;
#[cfg(feature = "yaml")]
mod yaml;

pub use document::Document;
pub use document::DocumentBuilder;
pub use ids::DocumentId;
pub use ids::NodeId;
pub use ids::NodeRef;
pub use node::Node;
pub use node::NodeKind;
pub use node::NodeType;
pub use node::ScalarKind;
pub use node::ScalarValue;
pub use node_view::NodeView;

/// The mapping key which marks a node as a reference to another node.
pub const REF_KEY: &str = "$ref";

#[cfg(all(test, feature = "yaml"))]
mod tests;
