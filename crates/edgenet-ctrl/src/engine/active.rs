//! Activation lifecycle of the single active scenario.

use edgenet_types::ScenarioDoc;
use tracing::{info, warn};

use super::Engine;
use crate::error::CtrlError;

impl Engine {
    /// Activate the named stored scenario and publish it to dependents.
    ///
    /// Refused with [`CtrlError::AlreadyActive`] while a scenario is active;
    /// the originally-activated content is left untouched. Any failure before
    /// the final state flip leaves the engine inactive with nothing partially
    /// applied.
    pub async fn activate(&self, name: &str) -> Result<(), CtrlError> {
        let mut state = self.active.write().await;
        if state.active {
            return Err(CtrlError::AlreadyActive);
        }

        let doc = self.scenarios.get(name).await?;
        self.metrics.set_scope(name).await?;
        self.topology.activate(&doc).await?;

        state.active = true;
        state.name = Some(name.to_string());
        info!(scenario = name, "scenario activated");
        Ok(())
    }

    /// The currently published scenario content, verbatim.
    pub async fn active_scenario(&self) -> Result<ScenarioDoc, CtrlError> {
        let state = self.active.read().await;
        if !state.active {
            return Err(CtrlError::NoActiveScenario);
        }
        Ok(self.topology.scenario().await?)
    }

    /// Name of the active scenario, if any.
    pub async fn active_name(&self) -> Option<String> {
        self.active.read().await.name.clone()
    }

    /// Deactivate and unpublish the active scenario. The in-memory handle is
    /// replaced with a fresh inactive one so residual mutations never leak
    /// into the next activation. The metric-scope reset is best-effort.
    pub async fn deactivate(&self) -> Result<(), CtrlError> {
        let mut state = self.active.write().await;
        if !state.active {
            return Err(CtrlError::NoActiveScenario);
        }

        self.topology.deactivate().await?;
        let previous = std::mem::take(&mut *state);

        if let Err(err) = self.metrics.set_scope("").await {
            warn!(%err, "failed to reset metric scope on deactivation");
        }
        info!(scenario = previous.name.as_deref(), "scenario deactivated");
        Ok(())
    }
}
