use crate::loc::SourceLocation;
use thiserror::Error;

/// Problems with the text of a reference pointer.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PointerSyntaxError {
    #[error("Reference pointer is empty")]
    Empty,

    #[error(
        "Invalid `~` escape in pointer segment `{segment}` (only `~0` and `~1` \
        are allowed)"
    )]
    InvalidEscape {
        segment: String,
    },

    #[error("Invalid percent-encoding in pointer segment `{segment}`")]
    InvalidPercentEncoding {
        segment: String,
    },

    #[error("Pointer `{pointer}` contains more than one `#`")]
    MultipleFragments {
        pointer: String,
    },

    #[error("Reference value must be a string, found a {found}")]
    NonStringReference {
        found: crate::node::NodeType,
    },

    #[error(
        "Pointer fragment `{fragment}` must either be empty or start with `/`"
    )]
    RelativeFragment {
        fragment: String,
    },

    #[error("Pointer `{pointer}` contains whitespace")]
    Whitespace {
        pointer: String,
    },
}

/// Failure to obtain an external document.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LoadError {
    #[error(
        "Reference to file document `{location}` is not allowed by the index \
        configuration"
    )]
    FileReferencesDisabled {
        location: String,
    },

    #[error(
        "Document `{location}` is not loaded and no document loader is \
        configured"
    )]
    NoLoader {
        location: String,
    },

    #[error("Document `{location}` is not part of this index")]
    NotIndexed {
        location: String,
    },

    #[error(
        "Reference to remote document `{location}` is not allowed by the \
        index configuration"
    )]
    RemoteReferencesDisabled {
        location: String,
    },

    #[error("Unable to reach document `{location}`: {reason}")]
    Unreachable {
        location: String,
        reason: String,
    },

    #[error("Unable to parse document `{location}`: {reason}")]
    Unparsable {
        location: String,
        reason: String,
    },
}
impl LoadError {
    pub fn location(&self) -> &str {
        match self {
            LoadError::FileReferencesDisabled { location }
            | LoadError::NoLoader { location }
            | LoadError::NotIndexed { location }
            | LoadError::RemoteReferencesDisabled { location }
            | LoadError::Unreachable { location, .. }
            | LoadError::Unparsable { location, .. }
                => location.as_str(),
        }
    }
}

/// A reference which could not be resolved.
///
/// Index errors are collected per reference: one bad pointer never prevents
/// the rest of a [`DocumentIndex`](crate::index::DocumentIndex) from being
/// built. `site` is the location of the `$ref` that failed, or `None` when
/// the failing pointer was passed directly to
/// [`DocumentIndex::resolve()`](crate::index::DocumentIndex::resolve).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum IndexError {
    #[error(
        "Malformed reference `{pointer}`{}: {source}",
        fmt_site(site),
    )]
    Syntax {
        pointer: String,
        site: Option<SourceLocation>,
        source: PointerSyntaxError,
    },

    #[error(
        "Reference `{pointer}`{} could not be resolved: segment \
        `{missing_segment}` does not exist",
        fmt_site(site),
    )]
    NotFound {
        pointer: String,
        missing_segment: String,
        site: Option<SourceLocation>,
    },

    #[error(
        "Reference `{pointer}`{} could not be resolved: {source}",
        fmt_site(site),
    )]
    Load {
        pointer: String,
        site: Option<SourceLocation>,
        source: LoadError,
    },
}
impl IndexError {
    pub fn pointer(&self) -> &str {
        match self {
            IndexError::Syntax { pointer, .. }
            | IndexError::NotFound { pointer, .. }
            | IndexError::Load { pointer, .. }
                => pointer.as_str(),
        }
    }

    pub fn site(&self) -> Option<&SourceLocation> {
        match self {
            IndexError::Syntax { site, .. }
            | IndexError::NotFound { site, .. }
            | IndexError::Load { site, .. }
                => site.as_ref(),
        }
    }

    pub(crate) fn with_site(mut self, location: SourceLocation) -> Self {
        match &mut self {
            IndexError::Syntax { site, .. }
            | IndexError::NotFound { site, .. }
            | IndexError::Load { site, .. }
                => *site = Some(location),
        }
        self
    }
}

fn fmt_site(site: &Option<SourceLocation>) -> String {
    match site {
        Some(site) => format!(" at {site}"),
        None => String::new(),
    }
}
