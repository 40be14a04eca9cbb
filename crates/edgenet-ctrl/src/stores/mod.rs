//! Contracts for the engine's external collaborators: the scenario document
//! store, the live topology model, the pod health store, the liveness
//! watchdog and the metric sink. In-memory backends live in [`mem`].

pub mod mem;

use std::collections::HashMap;

use async_trait::async_trait;
use edgenet_types::{NetworkCharacteristicsUpdate, NodeMove, NodeServiceMaps, ScenarioDoc};
use thiserror::Error;

pub use mem::MemBackends;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} already exists")]
    Conflict(String),
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}

/// Named scenario documents, keyed by name. `put` is create-only; `update`
/// requires the document to exist.
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    async fn get(&self, name: &str) -> StoreResult<ScenarioDoc>;
    async fn put(&self, name: &str, doc: ScenarioDoc) -> StoreResult<()>;
    async fn update(&self, name: &str, doc: ScenarioDoc) -> StoreResult<()>;
    async fn remove(&self, name: &str) -> StoreResult<()>;
    async fn remove_all(&self) -> StoreResult<()>;
    async fn list(&self) -> StoreResult<Vec<ScenarioDoc>>;
}

/// The live topology graph. Owns node state and publication to dependents;
/// the engine drives it but never reaches into the graph representation.
///
/// UE lookup is type-filtered at the contract: `ue_poas_in_range` resolves
/// only nodes of kind UE, so a name bound to any other node kind reads as
/// absent. Callers of `set_ue_poas_in_range` must pass a sorted list; the
/// stored list stays sorted so change detection can compare positionally.
#[async_trait]
pub trait TopologyModel: Send + Sync {
    async fn activate(&self, doc: &ScenarioDoc) -> StoreResult<()>;
    async fn deactivate(&self) -> StoreResult<()>;
    async fn scenario(&self) -> StoreResult<ScenarioDoc>;
    async fn move_node(&self, element: &str, dest: &str) -> StoreResult<NodeMove>;
    async fn update_net_char(&self, update: &NetworkCharacteristicsUpdate) -> StoreResult<()>;
    async fn ue_poas_in_range(&self, name: &str) -> StoreResult<Option<Vec<String>>>;
    async fn set_ue_poas_in_range(&self, name: &str, poas: Vec<String>) -> StoreResult<()>;
    /// Re-publish the active model so dependents observe mutated content.
    async fn republish(&self) -> StoreResult<()>;
    async fn service_maps(&self) -> StoreResult<Vec<NodeServiceMaps>>;
}

/// Visitor invoked per matching health-store entry with the entry's key and
/// field map. A visitor error aborts the scan.
pub type EntryVisitor<'a> =
    dyn FnMut(&str, &HashMap<String, String>) -> StoreResult<()> + Send + 'a;

/// Key-value store where cooperating services publish their health.
#[async_trait]
pub trait HealthStore: Send + Sync {
    async fn for_each_entry(
        &self,
        pattern: &str,
        visit: &mut EntryVisitor<'_>,
    ) -> StoreResult<()>;
}

/// Heartbeat tracker for a component that does not self-report health.
#[async_trait]
pub trait Watchdog: Send + Sync {
    async fn is_alive(&self) -> bool;
}

/// Metric/usage store scoped to the active scenario. Event recording is
/// best-effort from the engine's point of view.
#[async_trait]
pub trait MetricSink: Send + Sync {
    async fn set_scope(&self, scope: &str) -> StoreResult<()>;
    async fn record_event(&self, kind: &str, payload: &serde_json::Value) -> StoreResult<()>;
}
