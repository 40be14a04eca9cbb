use serde::{Deserialize, Serialize};

/// A stored topology-graph document. The engine treats the content as opaque:
/// it is fetched, published and returned verbatim, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDoc {
    pub name: String,
    /// Remainder of the document (network elements, locations, services).
    #[serde(flatten)]
    pub content: serde_json::Map<String, serde_json::Value>,
}

impl ScenarioDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: serde_json::Map::new(),
        }
    }
}

/// Outcome of a mobility move: the network locations the element left and
/// joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMove {
    pub old_parent: String,
    pub new_parent: String,
}
