use serde::{Deserialize, Serialize};

/// Inbound runtime event. The event kind is carried out-of-band (URL path
/// segment); the envelope holds at most one populated variant and is decoded
/// strictly against the declared kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility: Option<MobilityEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_characteristics_update: Option<NetworkCharacteristicsUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poas_in_range: Option<PoasInRangeEvent>,
}

/// Move a network element under a new parent location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobilityEvent {
    pub element_name: String,
    pub dest: String,
}

/// Patch the network characteristics of a scenario element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCharacteristicsUpdate {
    pub element_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_variation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_loss: Option<f64>,
}

/// Replace the set of points of access currently visible to a UE.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoasInRangeEvent {
    pub ue: String,
    #[serde(default)]
    pub poas_in_range: Vec<String>,
}
