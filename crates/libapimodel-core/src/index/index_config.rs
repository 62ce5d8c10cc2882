use crate::index::DocumentLoader;
use std::sync::Arc;

/// Controls how a [`DocumentIndex`](crate::index::DocumentIndex) treats
/// references to documents other than the ones it was built from.
///
/// By default references to other files are followed (given a loader) and
/// references to network locations are not.
#[derive(Clone)]
pub struct IndexConfig {
    allow_file_references: bool,
    allow_remote_references: bool,
    loader: Option<Arc<dyn DocumentLoader>>,
}
impl IndexConfig {
    pub fn new() -> Self {
        Self {
            allow_file_references: true,
            allow_remote_references: false,
            loader: None,
        }
    }

    pub fn with_loader(mut self, loader: Arc<dyn DocumentLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn with_file_references(mut self, allow: bool) -> Self {
        self.allow_file_references = allow;
        self
    }

    pub fn with_remote_references(mut self, allow: bool) -> Self {
        self.allow_remote_references = allow;
        self
    }

    pub fn allow_file_references(&self) -> bool {
        self.allow_file_references
    }

    pub fn allow_remote_references(&self) -> bool {
        self.allow_remote_references
    }

    pub fn loader(&self) -> Option<&Arc<dyn DocumentLoader>> {
        self.loader.as_ref()
    }
}
impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for IndexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexConfig")
            .field("allow_file_references", &self.allow_file_references)
            .field("allow_remote_references", &self.allow_remote_references)
            .field("loader", &self.loader.as_ref().map(|_| "<dyn DocumentLoader>"))
            .finish()
    }
}
