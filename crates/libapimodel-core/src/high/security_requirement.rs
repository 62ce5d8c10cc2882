use crate::high::HighModel;
use crate::low;
use indexmap::IndexMap;
use inherent::inherent;
use serde::Serialize;
use std::sync::Arc;

/// High-level Security Requirement list.
///
/// Each entry maps scheme names to required scopes; the schemes in one
/// entry are required together and the entries are alternatives. An empty
/// entry means no authentication is needed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SecurityRequirement {
    #[serde(skip)]
    low: Arc<low::SecurityRequirement>,
    requirements: Vec<IndexMap<String, Vec<String>>>,
}
#[inherent]
impl HighModel for SecurityRequirement {
    type Low = low::SecurityRequirement;

    pub fn from_low(low: Arc<low::SecurityRequirement>) -> Self {
        let requirements = low.requirements
            .iter()
            .map(|entry| {
                entry.value()
                    .iter()
                    .map(|(name, scopes)| (
                        name.value().clone(),
                        scopes.value().iter().map(|scope| scope.value().clone()).collect(),
                    ))
                    .collect()
            })
            .collect();

        Self {
            low,
            requirements,
        }
    }

    pub fn low(&self) -> &low::SecurityRequirement {
        &self.low
    }
}
impl SecurityRequirement {
    pub fn requirements(&self) -> &[IndexMap<String, Vec<String>>] {
        self.requirements.as_slice()
    }

    /// Scopes listed for `name` in the first entry that mentions it.
    pub fn find_requirement(&self, name: &str) -> Option<&[String]> {
        self.requirements
            .iter()
            .find_map(|entry| entry.get(name))
            .map(|scopes| scopes.as_slice())
    }

    /// Whether one of the alternatives is "no authentication".
    pub fn allows_anonymous(&self) -> bool {
        self.requirements.iter().any(|entry| entry.is_empty())
    }
}
