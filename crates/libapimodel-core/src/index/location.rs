/// Resolves the document part of a pointer (`target`) against the location of
/// the document that contains the pointer (`base`) and normalizes the result,
/// so that every spelling of the same document maps to one canonical
/// location.
///
/// ```
/// use libapimodel_core::index::canonicalize_location;
///
/// assert_eq!(
///     canonicalize_location("specs/api.yaml", "./models/../common.yaml"),
///     "specs/common.yaml",
/// );
/// assert_eq!(
///     canonicalize_location("https://example.com/a/api.yaml", "b.yaml"),
///     "https://example.com/a/b.yaml",
/// );
/// ```
pub fn canonicalize_location(base: &str, target: &str) -> String {
    if target.is_empty() {
        return normalize_location(base);
    }
    if has_scheme(target) || target.starts_with('/') {
        return normalize_location(target);
    }

    let base_dir = match base.rfind('/') {
        Some(idx) => &base[..=idx],
        None => "",
    };
    normalize_location(&format!("{base_dir}{target}"))
}

/// Whether a canonical location names a network resource rather than a
/// file.
pub fn is_remote_location(location: &str) -> bool {
    has_scheme(location) && !location.starts_with("file://")
}

fn has_scheme(location: &str) -> bool {
    location.find("://").is_some_and(|idx| {
        idx > 0 && location[..idx].chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

fn normalize_location(location: &str) -> String {
    let (prefix, path) = match location.find("://") {
        Some(scheme_end) if has_scheme(location) => {
            let authority_start = scheme_end + 3;
            let path_start = location[authority_start..]
                .find('/')
                .map(|idx| authority_start + idx)
                .unwrap_or(location.len());
            location.split_at(path_start)
        },
        _ => ("", location),
    };

    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = vec![];
    for segment in path.split('/') {
        match segment {
            "" | "." => (),
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                },
                _ if absolute => (),
                _ => segments.push(".."),
            },
            segment => segments.push(segment),
        }
    }

    let mut normalized = String::from(prefix);
    if absolute {
        normalized.push('/');
    }
    normalized.push_str(&segments.join("/"));
    normalized
}
