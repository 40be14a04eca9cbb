//! The control engine proper: activation lifecycle, event processing,
//! service-map filtering and pod health aggregation over one shared
//! active-scenario handle.

mod active;
mod events;
mod service_maps;
mod states;

use std::sync::Arc;

use edgenet_types::ScenarioDoc;
use tokio::sync::RwLock;

use crate::config::CtrlConfig;
use crate::error::CtrlError;
use crate::stores::{
    HealthStore, MemBackends, MetricSink, ScenarioStore, TopologyModel, Watchdog,
};

pub use events::EventKind;
pub use service_maps::ServiceMapFilter;
pub use states::CORE_PODS;

/// Lifecycle state of the single in-process active-scenario handle. Replaced
/// wholesale on deactivation so no stale content survives into the next
/// activation.
#[derive(Debug, Default)]
struct ActiveState {
    active: bool,
    name: Option<String>,
}

/// The engine. Stateless per request apart from `active`, which is the only
/// in-process shared mutable resource: lifecycle transitions take the write
/// guard for the whole check-mutate-publish sequence, while event mutations
/// and content reads share the read guard and may run concurrently.
pub struct Engine {
    config: CtrlConfig,
    scenarios: Arc<dyn ScenarioStore>,
    topology: Arc<dyn TopologyModel>,
    health: Arc<dyn HealthStore>,
    watchdog: Arc<dyn Watchdog>,
    metrics: Arc<dyn MetricSink>,
    active: RwLock<ActiveState>,
}

impl Engine {
    pub fn new(
        config: CtrlConfig,
        scenarios: Arc<dyn ScenarioStore>,
        topology: Arc<dyn TopologyModel>,
        health: Arc<dyn HealthStore>,
        watchdog: Arc<dyn Watchdog>,
        metrics: Arc<dyn MetricSink>,
    ) -> Self {
        Self {
            config,
            scenarios,
            topology,
            health,
            watchdog,
            metrics,
            active: RwLock::new(ActiveState::default()),
        }
    }

    /// Engine wired over a set of in-memory backends.
    pub fn with_backends(config: CtrlConfig, backends: &MemBackends) -> Self {
        Self::new(
            config,
            backends.scenarios.clone(),
            backends.topology.clone(),
            backends.health.clone(),
            backends.watchdog.clone(),
            backends.metrics.clone(),
        )
    }

    pub fn config(&self) -> &CtrlConfig {
        &self.config
    }

    // --- scenario store pass-through -------------------------------------

    /// Create a named scenario. The path name is authoritative; the stored
    /// document carries it regardless of the body's own name field.
    pub async fn create_scenario(&self, name: &str, mut doc: ScenarioDoc) -> Result<(), CtrlError> {
        doc.name = name.to_string();
        self.scenarios.put(name, doc).await?;
        Ok(())
    }

    pub async fn get_scenario(&self, name: &str) -> Result<ScenarioDoc, CtrlError> {
        Ok(self.scenarios.get(name).await?)
    }

    pub async fn list_scenarios(&self) -> Result<Vec<ScenarioDoc>, CtrlError> {
        Ok(self.scenarios.list().await?)
    }

    pub async fn update_scenario(&self, name: &str, mut doc: ScenarioDoc) -> Result<(), CtrlError> {
        doc.name = name.to_string();
        self.scenarios.update(name, doc).await?;
        Ok(())
    }

    pub async fn delete_scenario(&self, name: &str) -> Result<(), CtrlError> {
        self.scenarios.remove(name).await?;
        Ok(())
    }

    pub async fn delete_all_scenarios(&self) -> Result<(), CtrlError> {
        self.scenarios.remove_all().await?;
        Ok(())
    }
}
