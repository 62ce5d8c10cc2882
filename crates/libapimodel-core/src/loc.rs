/// Line/column position of a [`Node`](crate::node::Node) within the document
/// it was parsed from.
///
/// Positions are reported exactly as the parser that produced the document
/// reported them (1-based for the bundled YAML adapter). Nodes created
/// programmatically without position information use
/// [`SourcePosition::unknown()`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SourcePosition {
    line: usize,
    column: usize,
}
impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// A position for nodes which have no source text behind them.
    pub fn unknown() -> Self {
        Self { line: 0, column: 0 }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_unknown(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}
impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A [`SourcePosition`] paired with the canonical location of the document
/// that contains it. Used by errors so that diagnostics can point at a
/// concrete file (or URL) and line.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SourceLocation {
    pub document: String,
    pub position: SourcePosition,
}
impl SourceLocation {
    pub fn new(document: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            document: document.into(),
            position,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.document, self.position)
    }
}
