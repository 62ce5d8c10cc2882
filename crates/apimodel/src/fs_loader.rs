use libapimodel::index::DocumentLoader;
use libapimodel::index::LoadError;
use libapimodel::index::is_remote_location;
use libapimodel::node::Document;

/// Loads referenced documents from the local filesystem.
///
/// Locations are the canonical ones computed by the index, i.e. paths
/// relative to the referring document's own path (or `file://` URLs).
#[derive(Debug, Default)]
pub(crate) struct FsLoader;

impl DocumentLoader for FsLoader {
    fn load(&self, location: &str) -> Result<Document, LoadError> {
        if is_remote_location(location) {
            return Err(LoadError::Unreachable {
                location: location.to_string(),
                reason: "fetching network documents is not supported".to_string(),
            });
        }

        let path = location.strip_prefix("file://").unwrap_or(location);
        log::debug!("Reading referenced document from `{path}`.");
        let text = std::fs::read_to_string(path).map_err(|err| {
            LoadError::Unreachable {
                location: location.to_string(),
                reason: err.to_string(),
            }
        })?;
        Document::from_yaml_str(location, &text)
    }
}
