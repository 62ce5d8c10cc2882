pub mod high;
pub mod index;
pub mod loc;
pub mod low;
pub mod node;
mod document_model;
mod value;

pub use document_model::DocumentModel;
pub use document_model::DocumentModelError;
pub use document_model::SchemaVisit;
pub use value::Value;

#[cfg(all(test, feature = "yaml"))]
mod tests;
