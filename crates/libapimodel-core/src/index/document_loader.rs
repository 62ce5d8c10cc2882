use crate::index::LoadError;
use crate::node::Document;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

/// Fetches and parses documents which are referenced but were not provided
/// up front (e.g. `other.yaml#/components/schemas/Pet`).
///
/// Implementations decide how a location maps to bytes (filesystem, network,
/// an in-memory fixture, ...) and may impose their own timeouts. The
/// [`DocumentIndex`](crate::index::DocumentIndex) only ever calls a loader
/// through a [`MemoizingLoader`], so implementations do not need to cache.
pub trait DocumentLoader: Send + Sync {
    fn load(&self, location: &str) -> Result<Document, LoadError>;
}

type LoadCell = OnceLock<Result<Arc<Document>, LoadError>>;

/// Wraps a [`DocumentLoader`] so that each canonical location is loaded at
/// most once, including when several threads ask for the same location at
/// the same time.
///
/// The map lock is only held long enough to find (or create) the
/// per-location cell. The load itself runs inside that cell's
/// [`OnceLock::get_or_init()`], so callers racing on one location wait for
/// the single in-flight load while loads of other locations proceed.
pub struct MemoizingLoader {
    inner: Arc<dyn DocumentLoader>,
    loads: Mutex<HashMap<String, Arc<LoadCell>>>,
}
impl MemoizingLoader {
    pub fn new(inner: Arc<dyn DocumentLoader>) -> Self {
        Self {
            inner,
            loads: Mutex::new(HashMap::new()),
        }
    }

    /// Loads the document at `location` (which must already be canonical),
    /// or returns the cached outcome of an earlier load. Failures are cached
    /// too.
    pub fn load(&self, location: &str) -> Result<Arc<Document>, LoadError> {
        let cell = {
            let mut loads = self.loads.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(loads.entry(location.to_string()).or_default())
        };

        cell.get_or_init(|| {
            log::debug!("Loading external document `{location}`.");
            self.inner
                .load(location)
                .map(|document| Arc::new(document.with_location(location.to_string())))
                .inspect_err(|err| log::debug!("Loading `{location}` failed: {err}"))
        }).clone()
    }

    /// Locations for which a load has been requested, in no particular
    /// order.
    pub fn requested_locations(&self) -> Vec<String> {
        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}
impl std::fmt::Debug for MemoizingLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoizingLoader")
            .field("requested_locations", &self.requested_locations())
            .finish_non_exhaustive()
    }
}
