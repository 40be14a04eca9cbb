use serde::{Deserialize, Serialize};

/// Normalized health record for one monitored pod. Built fresh on every
/// aggregation request from the health store's field maps; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodStatus {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialized: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unschedulable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok_containers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_containers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restarts: Option<String>,
    /// Coarse state: "Running", "NotRunning" or "NotAvailable".
    pub logical_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

impl PodStatus {
    /// Synthetic record for a component that has not been observed at all.
    pub fn not_available(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logical_state: "NotAvailable".into(),
            ..Self::default()
        }
    }
}

/// Aggregated view over all monitored pods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodsStatus {
    #[serde(default)]
    pub pod_status: Vec<PodStatus>,
}
