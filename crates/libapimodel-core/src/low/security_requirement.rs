use crate::low::BuildContext;
use crate::low::FromNode;
use crate::low::KeyReference;
use crate::low::ValueReference;
use crate::node::NodeType;
use crate::node::NodeView;
use indexmap::IndexMap;

/// One alternative of a requirement list: scheme name to required scopes.
/// All schemes named in one entry are required together.
pub type RequirementEntry = IndexMap<KeyReference<String>, ValueReference<Vec<ValueReference<String>>>>;

/// Low-level Security Requirement list (`security:`).
///
/// Entries are alternatives (any one of them satisfies the requirement). An
/// empty entry is kept as-is: it means "no authentication" is acceptable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecurityRequirement {
    pub requirements: Vec<ValueReference<RequirementEntry>>,
}
impl SecurityRequirement {
    /// Scopes listed for `name` in the first entry that mentions it.
    pub fn find_requirement(&self, name: &str) -> Option<Vec<&str>> {
        self.requirements
            .iter()
            .find_map(|entry| entry.value().get(name))
            .map(|scopes| {
                scopes.value()
                    .iter()
                    .map(|scope| scope.value().as_str())
                    .collect()
            })
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}
impl FromNode for SecurityRequirement {
    fn from_node<'a>(
        ctx: &mut BuildContext<'a>,
        field: &str,
        node: NodeView<'a>,
    ) -> Option<Self> {
        if !node.is_sequence() {
            ctx.report_structural(field, NodeType::Sequence, node);
            return None;
        }

        let mut requirements = Vec::with_capacity(node.len());
        for (idx, item) in node.items().enumerate() {
            let label = format!("{field}[{idx}]");
            let Some((entry_node, reference)) = ctx.resolve_value(&label, item) else {
                continue;
            };
            if !entry_node.is_mapping() {
                ctx.report_structural(&label, NodeType::Mapping, entry_node);
                continue;
            }

            let mut entry = IndexMap::with_capacity(entry_node.len());
            for (key, value) in entry_node.entries() {
                let name = key.as_str().unwrap_or_default();
                let scopes = ctx.decode::<Vec<ValueReference<String>>>(
                    &format!("{label}.{name}"),
                    value,
                );
                if let Some(scopes) = scopes {
                    entry.insert(
                        KeyReference::new(name.to_string(), key.node_ref(), key.position()),
                        scopes,
                    );
                }
            }
            requirements.push(ValueReference::new(
                entry,
                entry_node.node_ref(),
                entry_node.position(),
                reference,
            ));
        }
        Some(SecurityRequirement { requirements })
    }
}
