use crate::index::LoadError;
use crate::loc::SourcePosition;
use crate::node::Document;
use crate::node::DocumentBuilder;
use crate::node::NodeId;
use crate::node::ScalarKind;

impl Document {
    /// Parses YAML (or JSON, which is a subset of YAML) text into a
    /// [`Document`] registered under `location`.
    ///
    /// Parsing itself is delegated to `marked-yaml`; this only converts its
    /// positioned tree into this crate's node arena. Plain scalars have their
    /// kind inferred from their text (see
    /// [`ScalarKind::infer()`](crate::node::ScalarKind::infer)); quoted
    /// scalars are always [`ScalarKind::String`].
    pub fn from_yaml_str(
        location: impl Into<String>,
        text: &str,
    ) -> Result<Document, LoadError> {
        let location = location.into();
        let parsed = marked_yaml::parse_yaml(0, text).map_err(|err| {
            LoadError::Unparsable {
                location: location.clone(),
                reason: err.to_string(),
            }
        })?;

        let mut builder = DocumentBuilder::new(location);
        let root = convert_node(&mut builder, &parsed);
        Ok(builder.finish(root))
    }
}

fn convert_node(
    builder: &mut DocumentBuilder,
    node: &marked_yaml::Node,
) -> NodeId {
    let position = span_position(node.span());
    match node {
        marked_yaml::Node::Scalar(scalar) =>
            convert_scalar(builder, scalar, position),

        marked_yaml::Node::Sequence(sequence) => {
            let items = sequence.iter()
                .map(|item| convert_node(builder, item))
                .collect();
            builder.sequence(items, position)
        },

        marked_yaml::Node::Mapping(mapping) => {
            let mut entries = Vec::with_capacity(mapping.len());
            for (key, value) in mapping.iter() {
                let key_id = convert_scalar(builder, key, span_position(key.span()));
                let value_id = convert_node(builder, value);
                entries.push((key_id, value_id));
            }
            builder.mapping(entries, position)
        },
    }
}

/// Quoted (and block) scalars are strings no matter what their text looks
/// like; only plain scalars have their kind inferred.
fn convert_scalar(
    builder: &mut DocumentBuilder,
    scalar: &marked_yaml::types::MarkedScalarNode,
    position: SourcePosition,
) -> NodeId {
    if scalar.may_coerce() {
        builder.scalar(scalar.as_str(), position)
    } else {
        builder.typed_scalar(scalar.as_str(), ScalarKind::String, position)
    }
}

fn span_position(span: &marked_yaml::Span) -> SourcePosition {
    span.start()
        .map(|marker| SourcePosition::new(marker.line(), marker.column()))
        .unwrap_or_default()
}
