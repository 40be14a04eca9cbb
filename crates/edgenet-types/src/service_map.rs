use serde::{Deserialize, Serialize};

/// Per-node ingress/egress service routing published by the active scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeServiceMaps {
    pub node: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingress_service_map: Vec<IngressService>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub egress_service_map: Vec<EgressService>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressService {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// Egress entries carry two names: the service itself and the origin-service
/// alias it fronts; a service filter may match either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EgressService {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub me_svc_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}
