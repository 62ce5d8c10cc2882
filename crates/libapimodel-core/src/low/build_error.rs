use crate::loc::SourceLocation;
use crate::node::NodeType;
use thiserror::Error;

/// A problem found while decoding document nodes into low-level objects.
///
/// Build errors never stop a build: the offending field is left empty, the
/// error is attached to every object that was being built when it occurred,
/// and it is added to the document-wide list returned by
/// [`build()`](crate::low::build).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BuildError {
    #[error("`{field}` at {location} could not be decoded as {expected}: found `{raw}`")]
    Scalar {
        expected: &'static str,
        field: String,
        location: SourceLocation,
        raw: String,
    },

    #[error(
        "Schema at {location} failed to build ({} errors): {}",
        errors.len(),
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("; "),
    )]
    Schema {
        errors: Vec<BuildError>,
        location: SourceLocation,
    },

    #[error("Expected `{field}` at {location} to be a {expected}, found a {found}")]
    Structural {
        expected: NodeType,
        field: String,
        found: NodeType,
        location: SourceLocation,
    },

    #[error("`{field}` at {location} refers to `{pointer}`, which could not be resolved")]
    UnresolvedReference {
        field: String,
        location: SourceLocation,
        pointer: String,
    },
}
impl BuildError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            BuildError::Scalar { location, .. }
            | BuildError::Schema { location, .. }
            | BuildError::Structural { location, .. }
            | BuildError::UnresolvedReference { location, .. }
                => location,
        }
    }
}
