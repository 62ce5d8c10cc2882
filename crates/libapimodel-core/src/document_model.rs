use crate::high;
use crate::index::DocumentIndex;
use crate::index::IndexConfig;
use crate::index::IndexError;
use crate::low;
use crate::low::BuildError;
use crate::node::Document;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentModelError>;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DocumentModelError {
    #[error("No root document was provided")]
    NoRootDocument,
}

/// One schema visited by [`DocumentModel::walk_schemas()`].
pub struct SchemaVisit<'a> {
    /// Keyword path from `components.schemas` to this schema, e.g.
    /// `Pet.properties.tags.items`.
    pub path: &'a str,
    pub proxy: &'a low::SchemaProxy,
    pub schema: &'a std::result::Result<Arc<low::Schema>, BuildError>,
}

/// An indexed document set along with the low-level model of its (first)
/// root document.
#[derive(Debug)]
pub struct DocumentModel {
    errors: Vec<BuildError>,
    index: Arc<DocumentIndex>,
    index_errors: Vec<IndexError>,
    root: Arc<low::OpenApi>,
}
impl DocumentModel {
    /// Builds the low-level model of `index`'s first root document.
    pub fn build(index: Arc<DocumentIndex>) -> Result<Self> {
        let root = index.root().ok_or(DocumentModelError::NoRootDocument)?;
        let (openapi, errors) = low::build::<low::OpenApi>(&index, root);
        log::debug!(
            "Built model of `{}` with {} build errors.",
            index.view(root).location(),
            errors.len(),
        );
        Ok(Self {
            errors,
            index,
            index_errors: vec![],
            root: Arc::new(openapi),
        })
    }

    /// Indexes `roots` with `config`, then builds the model. Index errors
    /// are kept apart from build errors.
    pub fn from_documents(roots: Vec<Document>, config: IndexConfig) -> Result<Self> {
        let (index, index_errors) = DocumentIndex::build_with_config(roots, config);
        let mut model = Self::build(Arc::new(index))?;
        model.index_errors = index_errors;
        Ok(model)
    }

    /// Every error raised while building the low-level model, document-wide.
    /// Errors from schemas built later through a proxy are not included.
    pub fn errors(&self) -> &[BuildError] {
        self.errors.as_slice()
    }

    pub fn index(&self) -> &Arc<DocumentIndex> {
        &self.index
    }

    pub fn index_errors(&self) -> &[IndexError] {
        self.index_errors.as_slice()
    }

    pub fn low(&self) -> &Arc<low::OpenApi> {
        &self.root
    }

    pub fn high(&self) -> high::OpenApi {
        high::OpenApi::from_low(Arc::clone(&self.root))
    }

    /// Visits every schema reachable from `components.schemas`, depth-first
    /// in source order, materializing each proxy on the way.
    ///
    /// Every proxy is visited, but the subtree of a given schema node is only
    /// descended into once; circular stubs and failed builds are leaves.
    pub fn walk_schemas(&self, mut visit: impl FnMut(SchemaVisit<'_>)) {
        let Some(schemas) = self.root
            .components
            .as_ref()
            .and_then(|components| components.value().schemas.as_ref()) else {
            return;
        };

        let mut stack: Vec<(String, Arc<low::SchemaProxy>)> = schemas.value()
            .iter()
            .rev()
            .map(|(name, proxy)| (name.value().clone(), Arc::clone(proxy.value())))
            .collect();
        let mut descended = HashSet::new();
        while let Some((path, proxy)) = stack.pop() {
            let schema = proxy.schema();
            visit(SchemaVisit {
                path: path.as_str(),
                proxy: &proxy,
                schema: &schema,
            });

            let Ok(schema) = schema else {
                continue;
            };
            if schema.is_circular() || !descended.insert(schema.node()) {
                continue;
            }
            for (label, nested) in schema.nested().into_iter().rev() {
                stack.push((format!("{path}.{label}"), Arc::clone(nested)));
            }
        }
    }
}
