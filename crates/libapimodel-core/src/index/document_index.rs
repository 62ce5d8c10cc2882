use crate::index::IndexBuilder;
use crate::index::IndexConfig;
use crate::index::IndexEntry;
use crate::index::IndexError;
use crate::index::LoadError;
use crate::index::Pointer;
use crate::index::ReferenceSite;
use crate::index::canonicalize_location;
use crate::loc::SourceLocation;
use crate::node::Document;
use crate::node::DocumentId;
use crate::node::NodeRef;
use crate::node::NodeView;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

/// Catalog of every node reachable from a set of documents along with every
/// reference (`$ref`) between them.
///
/// A `DocumentIndex` is built once, synchronously, from one or more root
/// [`Document`]s (plus any external documents the roots refer to, fetched
/// through the configured [`DocumentLoader`](crate::index::DocumentLoader)).
/// Afterwards it is immutable and can be shared between threads behind an
/// [`Arc`].
///
/// ```
/// # #[cfg(feature = "yaml")] {
/// use libapimodel_core::index::DocumentIndex;
/// use libapimodel_core::node::Document;
///
/// let document = Document::from_yaml_str("api.yaml", concat!(
///     "components:\n",
///     "  schemas:\n",
///     "    Pet:\n",
///     "      type: object\n",
///     "    Pets:\n",
///     "      type: array\n",
///     "      items:\n",
///     "        $ref: '#/components/schemas/Pet'\n",
/// )).unwrap();
///
/// let (index, errors) = DocumentIndex::build(vec![document]);
/// assert!(errors.is_empty());
///
/// let pet = index.resolve("#/components/schemas/Pet").unwrap();
/// assert_eq!(index.resolve("#/components/schemas/Pet").unwrap(), pet);
/// # }
/// ```
#[derive(Debug)]
pub struct DocumentIndex {
    pub(super) documents: Vec<Arc<Document>>,
    pub(super) entries: HashMap<String, IndexEntry>,
    pub(super) locations: HashMap<String, DocumentId>,
    pub(super) lookups: RwLock<HashMap<String, NodeRef>>,
    pub(super) roots: Vec<DocumentId>,
    pub(super) sites: IndexMap<NodeRef, ReferenceSite>,
}
impl DocumentIndex {
    /// Indexes `roots` using the default [`IndexConfig`] (no loader, so any
    /// reference to a document other than the roots fails with a
    /// [`LoadError`]).
    pub fn build(roots: Vec<Document>) -> (DocumentIndex, Vec<IndexError>) {
        Self::build_with_config(roots, IndexConfig::default())
    }

    /// Indexes `roots` and everything they (transitively) refer to.
    ///
    /// Never fails as a whole: every reference which cannot be resolved adds
    /// one [`IndexError`] to the returned list and the rest of the index is
    /// built regardless.
    pub fn build_with_config(
        roots: Vec<Document>,
        config: IndexConfig,
    ) -> (DocumentIndex, Vec<IndexError>) {
        let mut builder = IndexBuilder::new(config);
        for document in roots {
            builder.add_root(document);
        }
        builder.finish()
    }

    /// The root node of the first root document, if any.
    pub fn root(&self) -> Option<NodeRef> {
        self.roots.first().map(|id| NodeRef::new(*id, self.document(*id).root()))
    }

    /// The root node of every root document, in the order they were given.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef> + '_ {
        self.roots.iter().map(|id| NodeRef::new(*id, self.document(*id).root()))
    }

    /// # Panics
    ///
    /// Panics if `id` was not allocated by this index.
    pub fn document(&self, id: DocumentId) -> &Document {
        &self.documents[id.as_raw() as usize]
    }

    pub fn document_id(&self, location: &str) -> Option<DocumentId> {
        self.locations.get(location).copied()
    }

    /// Every indexed document (roots first, then loaded documents in load
    /// order).
    pub fn documents(&self) -> impl Iterator<Item = (DocumentId, &Document)> {
        self.documents
            .iter()
            .enumerate()
            .map(|(i, document)| (DocumentId::from_raw(i as u32), document.as_ref()))
    }

    pub fn view(&self, node: NodeRef) -> NodeView<'_> {
        NodeView::new(self.document(node.document), node.document, node.node)
    }

    pub fn location_of(&self, node: NodeRef) -> SourceLocation {
        let view = self.view(node);
        SourceLocation::new(view.location(), view.position())
    }

    /// Looks up the entry of a resolved pointer. `pointer` is interpreted
    /// relative to the first root document.
    pub fn entry(&self, pointer: &str) -> Option<&IndexEntry> {
        let base = self.roots.first().map(|id| self.document(*id).location())?;
        let parsed = Pointer::parse(pointer).ok()?;
        let (_, canonical) = canonical_pointer(base, &parsed);
        self.entries.get(&canonical)
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    /// The `$ref` found at `site`, if `site` is a reference node.
    pub fn reference_at(&self, site: NodeRef) -> Option<&ReferenceSite> {
        self.sites.get(&site)
    }

    /// Every `$ref` found while building the index, in discovery order.
    pub fn reference_sites(&self) -> impl Iterator<Item = &ReferenceSite> {
        self.sites.values()
    }

    /// The entry the `$ref` at `site` resolved to. `None` if `site` is not a
    /// reference node or its pointer failed to resolve.
    pub fn resolved_reference(&self, site: NodeRef) -> Option<&IndexEntry> {
        self.sites
            .get(&site)
            .and_then(|site| site.pointer())
            .and_then(|pointer| self.entries.get(pointer))
    }

    pub fn is_circular(&self, pointer: &str) -> bool {
        self.entry(pointer).is_some_and(|entry| entry.is_circular())
    }

    pub fn circular_references(&self) -> Vec<&IndexEntry> {
        let mut circular: Vec<_> =
            self.entries.values().filter(|entry| entry.is_circular()).collect();
        circular.sort_by(|a, b| a.pointer().cmp(b.pointer()));
        circular
    }

    pub fn remote_references(&self) -> Vec<&IndexEntry> {
        let mut remote: Vec<_> =
            self.entries.values().filter(|entry| entry.is_remote()).collect();
        remote.sort_by(|a, b| a.pointer().cmp(b.pointer()));
        remote
    }

    /// Resolves `pointer` relative to the first root document.
    ///
    /// Resolving the same pointer always yields the identical [`NodeRef`].
    /// Pointers which were referenced somewhere in the indexed documents are
    /// answered from the index directly; any other pointer is resolved once
    /// and then cached.
    pub fn resolve(&self, pointer: &str) -> Result<NodeRef, IndexError> {
        match self.roots.first() {
            Some(root) => self.resolve_from(*root, pointer),
            None => Err(IndexError::Load {
                pointer: pointer.to_string(),
                site: None,
                source: LoadError::NotIndexed {
                    location: String::new(),
                },
            }),
        }
    }

    /// Resolves `pointer` relative to the document `document`.
    ///
    /// No documents are loaded at this point: pointers into documents which
    /// were not indexed fail with [`LoadError::NotIndexed`].
    pub fn resolve_from(
        &self,
        document: DocumentId,
        pointer: &str,
    ) -> Result<NodeRef, IndexError> {
        let parsed = Pointer::parse(pointer).map_err(|source| IndexError::Syntax {
            pointer: pointer.to_string(),
            site: None,
            source,
        })?;
        let (location, canonical) =
            canonical_pointer(self.document(document).location(), &parsed);

        if let Some(entry) = self.entries.get(&canonical) {
            return Ok(entry.target());
        }
        if let Some(target) = self.lookups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&canonical) {
            return Ok(*target);
        }

        let document_id = self.document_id(&location).ok_or_else(|| IndexError::Load {
            pointer: canonical.clone(),
            site: None,
            source: LoadError::NotIndexed {
                location: location.clone(),
            },
        })?;
        let target = walk_segments(self.document(document_id), document_id, parsed.segments())
            .map_err(|missing_segment| IndexError::NotFound {
                pointer: canonical.clone(),
                missing_segment,
                site: None,
            })?;

        // An unreferenced pointer can still land on an alias; follow it the
        // same way the index followed every referenced pointer.
        let target = self.resolved_reference(target)
            .map(|entry| entry.target())
            .unwrap_or(target);

        self.lookups
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(canonical, target);
        Ok(target)
    }
}

/// Returns the canonical location of the document `pointer` addresses and the
/// canonical pointer string (`location#fragment`).
pub(super) fn canonical_pointer(
    base_location: &str,
    pointer: &Pointer,
) -> (String, String) {
    let location = match pointer.document() {
        Some(document) => canonicalize_location(base_location, document),
        None => base_location.to_string(),
    };
    let canonical = format!("{location}#{}", pointer.fragment());
    (location, canonical)
}

/// Walks `segments` down from the root of `document`. On failure, returns
/// the first segment that does not exist.
pub(super) fn walk_segments(
    document: &Document,
    document_id: DocumentId,
    segments: &[String],
) -> Result<NodeRef, String> {
    let mut view = NodeView::new(document, document_id, document.root());
    for segment in segments {
        let next =
            if view.is_mapping() {
                view.get(segment)
            } else if view.is_sequence() {
                segment.parse::<usize>().ok().and_then(|idx| view.item(idx))
            } else {
                None
            };
        view = next.ok_or_else(|| segment.to_string())?;
    }
    Ok(view.node_ref())
}
