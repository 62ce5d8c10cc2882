use crate::loc::SourcePosition;
use crate::node::NodeId;

/// The three shapes a document tree element can take.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum NodeType {
    Mapping,
    Scalar,
    Sequence,
}
impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NodeType::Mapping => "mapping",
            NodeType::Scalar => "scalar",
            NodeType::Sequence => "sequence",
        })
    }
}

/// The type a parser assigned to a scalar.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum ScalarKind {
    Bool,
    Float,
    Int,
    Null,
    String,
}
impl ScalarKind {
    /// Infers the kind of a plain (unquoted) scalar following the YAML 1.2
    /// core schema.
    pub fn infer(raw: &str) -> Self {
        match raw {
            "" | "~" | "null" | "Null" | "NULL" => return ScalarKind::Null,
            "true" | "True" | "TRUE" | "false" | "False" | "FALSE" =>
                return ScalarKind::Bool,
            ".inf" | "+.inf" | "-.inf" | ".Inf" | "+.Inf" | "-.Inf"
            | ".INF" | "+.INF" | "-.INF" | ".nan" | ".NaN" | ".NAN" =>
                return ScalarKind::Float,
            _ => (),
        }

        if raw.parse::<i64>().is_ok() {
            ScalarKind::Int
        } else if looks_like_float(raw) {
            ScalarKind::Float
        } else {
            ScalarKind::String
        }
    }
}

// `f64::from_str` accepts things like "inf" and "NaN" which YAML treats as
// strings, so only accept text built from digits, sign, dot and exponent.
fn looks_like_float(raw: &str) -> bool {
    let body = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    !body.is_empty()
        && body.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && body.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'))
        && raw.parse::<f64>().is_ok()
}

/// Text of a scalar node along with the kind the parser assigned it.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarValue {
    pub(crate) kind: ScalarKind,
    pub(crate) raw: String,
}
impl ScalarValue {
    pub fn new(raw: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    /// Builds a scalar whose kind is inferred from its text.
    pub fn plain(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            kind: ScalarKind::infer(&raw),
            raw,
        }
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            ScalarKind::Bool => Some(self.raw.eq_ignore_ascii_case("true")),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.kind {
            ScalarKind::Int => self.raw.parse().ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.kind {
            ScalarKind::Int => self.raw.parse::<i64>().ok().map(|i| i as f64),
            ScalarKind::Float => match self.raw.to_ascii_lowercase().as_str() {
                ".inf" | "+.inf" => Some(f64::INFINITY),
                "-.inf" => Some(f64::NEG_INFINITY),
                ".nan" => Some(f64::NAN),
                other => other.parse().ok(),
            },
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Ordered `(key, value)` pairs. Keys are always scalar nodes.
    Mapping(Vec<(NodeId, NodeId)>),
    Scalar(ScalarValue),
    Sequence(Vec<NodeId>),
}

/// An element of a parsed document tree.
///
/// Nodes are owned by the arena of their [`Document`](crate::node::Document)
/// and refer to their children by [`NodeId`]. They are never mutated once the
/// document has been finished.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) position: SourcePosition,
}
impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn node_type(&self) -> NodeType {
        match &self.kind {
            NodeKind::Mapping(_) => NodeType::Mapping,
            NodeKind::Scalar(_) => NodeType::Scalar,
            NodeKind::Sequence(_) => NodeType::Sequence,
        }
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }
}
