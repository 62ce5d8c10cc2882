use crate::index::PointerSyntaxError;

/// A parsed reference pointer: an optional document location followed by a
/// path of segments within that document.
///
/// Pointers use the `[location][#fragment]` syntax of JSON references. The
/// fragment is a JSON pointer: empty (the document root) or a sequence of
/// `/`-prefixed segments in which `~1` stands for `/`, `~0` stands for `~` and
/// percent-encoded bytes are decoded.
///
/// ```
/// use libapimodel_core::index::Pointer;
///
/// let pointer = Pointer::parse("common.yaml#/components/schemas/Pet").unwrap();
/// assert_eq!(pointer.document(), Some("common.yaml"));
/// assert_eq!(pointer.segments(), &["components", "schemas", "Pet"]);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Pointer {
    document: Option<String>,
    segments: Vec<String>,
}
impl Pointer {
    pub fn new(document: Option<String>, segments: Vec<String>) -> Self {
        Self { document, segments }
    }

    pub fn parse(raw: &str) -> Result<Self, PointerSyntaxError> {
        if raw.trim().is_empty() {
            return Err(PointerSyntaxError::Empty);
        }
        if raw.chars().any(|c| c.is_whitespace()) {
            return Err(PointerSyntaxError::Whitespace {
                pointer: raw.to_string(),
            });
        }

        let (document, fragment) = match raw.split_once('#') {
            Some((document, fragment)) => (document, Some(fragment)),
            None => (raw, None),
        };
        if fragment.is_some_and(|fragment| fragment.contains('#')) {
            return Err(PointerSyntaxError::MultipleFragments {
                pointer: raw.to_string(),
            });
        }

        let document = (!document.is_empty()).then(|| document.to_string());
        let segments = match fragment {
            None | Some("") => vec![],
            Some(fragment) => match fragment.strip_prefix('/') {
                Some(path) => path.split('/')
                    .map(decode_segment)
                    .collect::<Result<Vec<_>, _>>()?,
                None => return Err(PointerSyntaxError::RelativeFragment {
                    fragment: fragment.to_string(),
                }),
            },
        };

        Ok(Self { document, segments })
    }

    /// The document part of the pointer, exactly as written. `None` means the
    /// pointer addresses the document that contains it.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn segments(&self) -> &[String] {
        self.segments.as_slice()
    }

    pub fn is_local(&self) -> bool {
        self.document.is_none()
    }

    /// Re-encodes the segment path as a JSON-pointer fragment (without the
    /// leading `#`).
    pub fn fragment(&self) -> String {
        let mut fragment = String::new();
        for segment in &self.segments {
            fragment.push('/');
            fragment.push_str(&encode_segment(segment));
        }
        fragment
    }
}
impl std::fmt::Display for Pointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}#{}",
            self.document.as_deref().unwrap_or(""),
            self.fragment(),
        )
    }
}

/// Escapes a single segment so that it can be embedded in a JSON pointer.
///
/// `~` and `/` use JSON-pointer escapes; `%`, `#` and whitespace are
/// percent-encoded so that the result is itself a parseable pointer segment.
pub fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '~' => encoded.push_str("~0"),
            '/' => encoded.push_str("~1"),
            '%' | '#' => percent_encode(c, &mut encoded),
            c if c.is_whitespace() => percent_encode(c, &mut encoded),
            c => encoded.push(c),
        }
    }
    encoded
}

fn percent_encode(c: char, out: &mut String) {
    let mut buf = [0u8; 4];
    for byte in c.encode_utf8(&mut buf).bytes() {
        out.push_str(&format!("%{byte:02X}"));
    }
}

fn decode_segment(segment: &str) -> Result<String, PointerSyntaxError> {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let byte = bytes.get(i + 1..i + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                    .ok_or_else(|| PointerSyntaxError::InvalidPercentEncoding {
                        segment: segment.to_string(),
                    })?;
                decoded.push(byte);
                i += 3;
            },

            b'~' => {
                match bytes.get(i + 1) {
                    Some(b'0') => decoded.push(b'~'),
                    Some(b'1') => decoded.push(b'/'),
                    _ => return Err(PointerSyntaxError::InvalidEscape {
                        segment: segment.to_string(),
                    }),
                }
                i += 2;
            },

            byte => {
                decoded.push(byte);
                i += 1;
            },
        }
    }

    String::from_utf8(decoded).map_err(|_| {
        PointerSyntaxError::InvalidPercentEncoding {
            segment: segment.to_string(),
        }
    })
}
