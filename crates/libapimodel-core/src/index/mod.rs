mod document_index;
mod document_loader;
mod index_builder;
mod index_config;
mod index_entry;
mod index_error;
mod location;
mod pointer;

pub use document_index::DocumentIndex;
pub use document_loader::DocumentLoader;
pub use document_loader::MemoizingLoader;
use index_builder::IndexBuilder;
pub use index_config::IndexConfig;
pub use index_entry::IndexEntry;
pub use index_entry::ReferenceSite;
pub use index_error::IndexError;
pub use index_error::LoadError;
pub use index_error::PointerSyntaxError;
pub use location::canonicalize_location;
pub use location::is_remote_location;
pub use pointer::Pointer;
pub use pointer::encode_segment;

#[cfg(all(test, feature = "yaml"))]
mod tests;
