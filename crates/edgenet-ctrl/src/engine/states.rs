//! Cluster-wide pod health aggregation.

use std::collections::HashMap;

use edgenet_types::{PodStatus, PodsStatus};

use super::Engine;
use crate::error::CtrlError;
use crate::stores::StoreError;

/// Required platform components, matched by substring against reported pod
/// names. Members with no report at all surface as `NotAvailable` so a
/// converging deployment is distinguishable from an unhealthy one.
pub const CORE_PODS: [&str; 10] = [
    "edgenet-docstore",
    "edgenet-ctrl",
    "edgenet-loc-serv",
    "edgenet-metricbeat",
    "edgenet-metrics-engine",
    "edgenet-mg-manager",
    "edgenet-mon-engine",
    "edgenet-tc-engine",
    "edgenet-webhook",
    "virt-engine",
];

/// The virtualization engine does not self-report; its state comes from the
/// liveness watchdog.
const VIRT_ENGINE: &str = "virt-engine";

fn field(fields: &HashMap<String, String>, key: &str) -> Option<String> {
    fields.get(key).filter(|v| !v.is_empty()).cloned()
}

fn pod_name(fields: &HashMap<String, String>) -> String {
    field(fields, "app")
        .or_else(|| field(fields, "name"))
        .unwrap_or_default()
}

fn pod_details(fields: &HashMap<String, String>) -> PodStatus {
    PodStatus {
        name: pod_name(fields),
        namespace: field(fields, "namespace"),
        app: field(fields, "app"),
        origin: field(fields, "origin"),
        scenario: field(fields, "scenario"),
        phase: field(fields, "phase"),
        initialized: field(fields, "initialized"),
        scheduled: field(fields, "scheduled"),
        ready: field(fields, "ready"),
        unschedulable: field(fields, "unschedulable"),
        condition_error: field(fields, "conditionError"),
        ok_containers: field(fields, "okContainers"),
        total_containers: field(fields, "totalContainers"),
        restarts: field(fields, "restarts"),
        logical_state: fields.get("logicalState").cloned().unwrap_or_default(),
        start_time: field(fields, "startTime"),
    }
}

fn pod_state_only(fields: &HashMap<String, String>) -> PodStatus {
    PodStatus {
        name: pod_name(fields),
        logical_state: fields.get("logicalState").cloned().unwrap_or_default(),
        ..PodStatus::default()
    }
}

impl Engine {
    /// Scan the health store and build a fresh composite status view.
    ///
    /// `detailed` selects the full projection over the logical-state-only
    /// one. `kind` names the health-report namespace to scan; empty means the
    /// configured default. For the `core` namespace the result is reconciled
    /// against [`CORE_PODS`] and enriched with the watchdog-derived
    /// virtualization-engine entry.
    pub async fn pod_states(&self, detailed: bool, kind: &str) -> Result<PodsStatus, CtrlError> {
        let namespace = if kind.is_empty() {
            self.config.default_namespace.as_str()
        } else {
            kind
        };
        let pattern = format!("{}{}:*", self.config.health_key_prefix, namespace);

        let mut pods = PodsStatus::default();
        let mut visit = |_key: &str, fields: &HashMap<String, String>| {
            pods.pod_status.push(if detailed {
                pod_details(fields)
            } else {
                pod_state_only(fields)
            });
            Ok::<(), StoreError>(())
        };
        self.health.for_each_entry(&pattern, &mut visit).await?;

        if kind == "core" {
            let alive = self.watchdog.is_alive().await;
            pods.pod_status.push(PodStatus {
                name: VIRT_ENGINE.into(),
                logical_state: if alive { "Running" } else { "NotRunning" }.into(),
                ..PodStatus::default()
            });

            let mut present = [false; CORE_PODS.len()];
            for pod in &pods.pod_status {
                for (i, core) in CORE_PODS.iter().enumerate() {
                    if pod.name.contains(core) {
                        present[i] = true;
                        break;
                    }
                }
            }
            for (i, core) in CORE_PODS.iter().enumerate() {
                if !present[i] {
                    pods.pod_status.push(PodStatus::not_available(*core));
                }
            }
        }

        Ok(pods)
    }
}
