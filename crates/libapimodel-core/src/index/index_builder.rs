use crate::index::DocumentIndex;
use crate::index::IndexConfig;
use crate::index::IndexEntry;
use crate::index::IndexError;
use crate::index::LoadError;
use crate::index::MemoizingLoader;
use crate::index::Pointer;
use crate::index::PointerSyntaxError;
use crate::index::ReferenceSite;
use crate::index::canonicalize_location;
use crate::index::document_index::canonical_pointer;
use crate::index::document_index::walk_segments;
use crate::index::encode_segment;
use crate::index::is_remote_location;
use crate::loc::SourceLocation;
use crate::node::Document;
use crate::node::DocumentId;
use crate::node::NodeRef;
use crate::node::NodeView;
use crate::node::REF_KEY;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::RwLock;

/// Outcome of a resolution that did not produce a target.
enum Failure {
    /// The pointer is already being resolved further up the stack.
    Circular,
    Index(IndexError),
}

/// A `$ref` discovered by the walk but not yet resolved.
struct PendingEdge {
    path: String,
    raw: String,
    site: NodeRef,
}

/// Mutable state used while building a [`DocumentIndex`].
///
/// Building happens in two phases. First, every document is walked and each
/// `$ref` is recorded as a [`PendingEdge`]. Then each pending edge is
/// resolved. Resolving a pointer may load another document, whose own
/// references simply join the queue.
pub(super) struct IndexBuilder {
    allow_file_references: bool,
    allow_remote_references: bool,
    circular: HashSet<String>,
    documents: Vec<Arc<Document>>,
    errors: Vec<IndexError>,
    loader: Option<MemoizingLoader>,
    locations: HashMap<String, DocumentId>,
    pending: VecDeque<PendingEdge>,
    resolved: HashMap<String, Result<NodeRef, IndexError>>,
    roots: Vec<DocumentId>,
    sites: IndexMap<NodeRef, ReferenceSite>,
}
impl IndexBuilder {
    pub(super) fn new(config: IndexConfig) -> Self {
        Self {
            allow_file_references: config.allow_file_references(),
            allow_remote_references: config.allow_remote_references(),
            circular: HashSet::new(),
            documents: vec![],
            errors: vec![],
            loader: config.loader().map(|loader| MemoizingLoader::new(Arc::clone(loader))),
            locations: HashMap::new(),
            pending: VecDeque::new(),
            resolved: HashMap::new(),
            roots: vec![],
            sites: IndexMap::new(),
        }
    }

    pub(super) fn add_root(&mut self, document: Document) {
        let location = canonicalize_location("", document.location());
        let document = document.with_location(location);
        let id = self.register(Arc::new(document));
        self.roots.push(id);
    }

    pub(super) fn finish(mut self) -> (DocumentIndex, Vec<IndexError>) {
        log::debug!(
            "Resolving {} references across {} documents...",
            self.pending.len(),
            self.documents.len(),
        );
        while let Some(edge) = self.pending.pop_front() {
            self.resolve_edge(edge);
        }

        let mut entries: HashMap<String, IndexEntry> = HashMap::new();
        for site in self.sites.values() {
            let Some(pointer) = site.pointer() else { continue };
            let Some(Ok(target)) = self.resolved.get(pointer) else { continue };
            let entry = entries.entry(pointer.to_string()).or_insert_with(|| IndexEntry {
                circular: self.circular.contains(pointer),
                pointer: pointer.to_string(),
                remote: false,
                sites: vec![],
                target: *target,
            });
            entry.remote |= site.is_remote();
            entry.sites.push(site.node());
        }

        log::debug!(
            "Indexed {} documents: {} references, {} distinct targets, {} \
            circular, {} errors.",
            self.documents.len(),
            self.sites.len(),
            entries.len(),
            self.circular.len(),
            self.errors.len(),
        );

        let index = DocumentIndex {
            documents: self.documents,
            entries,
            locations: self.locations,
            lookups: RwLock::new(HashMap::new()),
            roots: self.roots,
            sites: self.sites,
        };
        (index, self.errors)
    }

    fn register(&mut self, document: Arc<Document>) -> DocumentId {
        let id = DocumentId::from_raw(self.documents.len() as u32);
        let location = document.location().to_string();
        if self.locations.contains_key(&location) {
            log::warn!(
                "Document location `{location}` was registered more than once; \
                pointers will address the first registration."
            );
        } else {
            self.locations.insert(location, id);
        }
        self.documents.push(document);
        self.walk_document(id);
        id
    }

    fn view(&self, node: NodeRef) -> NodeView<'_> {
        let document = &self.documents[node.document.as_raw() as usize];
        NodeView::new(document, node.document, node.node)
    }

    fn location_of(&self, node: NodeRef) -> SourceLocation {
        let view = self.view(node);
        SourceLocation::new(view.location(), view.position())
    }

    fn document_location(&self, id: DocumentId) -> &str {
        self.documents[id.as_raw() as usize].location()
    }

    /// Records a pending edge for every `$ref` in the document.
    fn walk_document(&mut self, id: DocumentId) {
        let document = Arc::clone(&self.documents[id.as_raw() as usize]);
        let mut stack = vec![(NodeView::new(&document, id, document.root()), String::new())];
        while let Some((view, path)) = stack.pop() {
            if view.is_mapping() {
                if let Some((_, value)) = view.get_entry(REF_KEY) {
                    match value.as_str() {
                        Some(raw) => self.pending.push_back(PendingEdge {
                            path: path.clone(),
                            raw: raw.to_string(),
                            site: view.node_ref(),
                        }),

                        None => self.errors.push(IndexError::Syntax {
                            pointer: String::new(),
                            site: Some(SourceLocation::new(
                                document.location(),
                                value.position(),
                            )),
                            source: PointerSyntaxError::NonStringReference {
                                found: value.node_type(),
                            },
                        }),
                    }
                }

                // Reversed so that nodes are popped in source order.
                let children: Vec<_> = view.entries()
                    .filter_map(|(key, value)| key.as_str().map(|key| (key, value)))
                    .collect();
                for (key, value) in children.into_iter().rev() {
                    stack.push((value, format!("{path}/{}", encode_segment(key))));
                }
            } else if view.is_sequence() {
                let items: Vec<_> = view.items().enumerate().collect();
                for (idx, item) in items.into_iter().rev() {
                    stack.push((item, format!("{path}/{idx}")));
                }
            }
        }
    }

    fn resolve_edge(&mut self, edge: PendingEdge) {
        let site_location = self.location_of(edge.site);
        let pointer = match Pointer::parse(&edge.raw) {
            Ok(pointer) => pointer,
            Err(source) => {
                self.errors.push(IndexError::Syntax {
                    pointer: edge.raw.clone(),
                    site: Some(site_location),
                    source,
                });
                self.sites.insert(edge.site, ReferenceSite {
                    node: edge.site,
                    path: edge.path,
                    pointer: None,
                    raw: edge.raw,
                    remote: false,
                });
                return;
            },
        };

        let base_location = self.document_location(edge.site.document).to_string();
        let (location, canonical) = canonical_pointer(&base_location, &pointer);
        log::trace!("Resolving `{}` ({canonical}) at {site_location}.", edge.raw);

        let result = self.resolve(&canonical, &location, pointer.segments(), &mut vec![]);
        if let Err(Failure::Index(err)) = result {
            self.errors.push(err.with_site(site_location));
        }

        self.sites.insert(edge.site, ReferenceSite {
            node: edge.site,
            path: edge.path,
            pointer: Some(canonical),
            raw: edge.raw,
            remote: location != base_location,
        });
    }

    /// Resolves a canonical pointer, memoizing the outcome.
    ///
    /// `in_progress` holds every pointer whose resolution is currently on the
    /// call stack. Re-entering one of them marks it circular and returns
    /// [`Failure::Circular`] instead of recursing.
    fn resolve(
        &mut self,
        canonical: &str,
        location: &str,
        segments: &[String],
        in_progress: &mut Vec<String>,
    ) -> Result<NodeRef, Failure> {
        if let Some(result) = self.resolved.get(canonical) {
            return result.clone().map_err(Failure::Index);
        }
        if in_progress.iter().any(|pointer| pointer == canonical) {
            if self.circular.insert(canonical.to_string()) {
                log::debug!(
                    "Circular reference: {} -> {canonical}",
                    in_progress.join(" -> "),
                );
            }
            return Err(Failure::Circular);
        }

        in_progress.push(canonical.to_string());
        let result = self.resolve_uncached(canonical, location, segments, in_progress);
        in_progress.pop();

        self.resolved.insert(canonical.to_string(), result.clone());
        result.map_err(Failure::Index)
    }

    fn resolve_uncached(
        &mut self,
        canonical: &str,
        location: &str,
        segments: &[String],
        in_progress: &mut Vec<String>,
    ) -> Result<NodeRef, IndexError> {
        let document_id = self.document_for(location).map_err(|source| IndexError::Load {
            pointer: canonical.to_string(),
            site: None,
            source,
        })?;

        let document = Arc::clone(&self.documents[document_id.as_raw() as usize]);
        let target = walk_segments(&document, document_id, segments)
            .map_err(|missing_segment| IndexError::NotFound {
                pointer: canonical.to_string(),
                missing_segment,
                site: None,
            })?;

        let target = self.follow_alias(canonical, target, in_progress)?;
        self.descend(target, in_progress);
        Ok(target)
    }

    /// If `target` is itself a reference node, resolves through it to the
    /// final target of the chain.
    fn follow_alias(
        &mut self,
        canonical: &str,
        target: NodeRef,
        in_progress: &mut Vec<String>,
    ) -> Result<NodeRef, IndexError> {
        let Some(raw) = self.view(target).reference().map(str::to_string) else {
            return Ok(target);
        };
        let pointer = Pointer::parse(&raw).map_err(|source| IndexError::Syntax {
            pointer: raw.clone(),
            site: None,
            source,
        })?;
        let base_location = self.document_location(target.document).to_string();
        let (location, next) = canonical_pointer(&base_location, &pointer);

        match self.resolve(&next, &location, pointer.segments(), in_progress) {
            Ok(resolved) => Ok(resolved),
            Err(Failure::Circular) => {
                self.circular.insert(canonical.to_string());
                Ok(target)
            },
            Err(Failure::Index(err)) => Err(err),
        }
    }

    /// Resolves every reference inside the subtree of `target` while
    /// `in_progress` still holds the pointer that led here, which is what
    /// exposes cycles running through nested structure (e.g. a schema whose
    /// property refers back to the schema). Failures are ignored here; they
    /// are reported when the edge itself is processed.
    fn descend(&mut self, target: NodeRef, in_progress: &mut Vec<String>) {
        for (site_document, raw) in self.references_within(target) {
            let Ok(pointer) = Pointer::parse(&raw) else { continue };
            let base_location = self.document_location(site_document).to_string();
            let (location, next) = canonical_pointer(&base_location, &pointer);
            let _ = self.resolve(&next, &location, pointer.segments(), in_progress);
        }
    }

    fn references_within(&self, root: NodeRef) -> Vec<(DocumentId, String)> {
        let mut references = vec![];
        let mut stack = vec![self.view(root)];
        while let Some(view) = stack.pop() {
            if let Some(raw) = view.reference() {
                references.push((view.node_ref().document, raw.to_string()));
            }
            if view.is_mapping() {
                let values: Vec<_> = view.entries().map(|(_, value)| value).collect();
                stack.extend(values.into_iter().rev());
            } else if view.is_sequence() {
                let items: Vec<_> = view.items().collect();
                stack.extend(items.into_iter().rev());
            }
        }
        references
    }

    /// Finds the indexed document at `location`, loading it if necessary.
    fn document_for(&mut self, location: &str) -> Result<DocumentId, LoadError> {
        if let Some(id) = self.locations.get(location) {
            return Ok(*id);
        }

        if is_remote_location(location) {
            if !self.allow_remote_references {
                return Err(LoadError::RemoteReferencesDisabled {
                    location: location.to_string(),
                });
            }
        } else if !self.allow_file_references {
            return Err(LoadError::FileReferencesDisabled {
                location: location.to_string(),
            });
        }

        let loader = self.loader.as_ref().ok_or_else(|| LoadError::NoLoader {
            location: location.to_string(),
        })?;
        let document = loader.load(location)?;
        Ok(self.register(document))
    }
}
