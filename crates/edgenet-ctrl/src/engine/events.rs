//! Validation and dispatch of inbound runtime events against the live
//! topology.

use edgenet_types::{
    EventEnvelope, MobilityEvent, NetworkCharacteristicsUpdate, PoasInRangeEvent,
};
use tracing::{debug, info, warn};

use super::Engine;
use crate::error::CtrlError;

/// Event discriminant, carried out-of-band as a request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Mobility,
    NetworkCharacteristicsUpdate,
    PoasInRange,
}

impl EventKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "MOBILITY" => Some(EventKind::Mobility),
            "NETWORK-CHARACTERISTICS-UPDATE" => Some(EventKind::NetworkCharacteristicsUpdate),
            "POAS-IN-RANGE" => Some(EventKind::PoasInRange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Mobility => "MOBILITY",
            EventKind::NetworkCharacteristicsUpdate => "NETWORK-CHARACTERISTICS-UPDATE",
            EventKind::PoasInRange => "POAS-IN-RANGE",
        }
    }
}

enum EventPayload {
    Mobility(MobilityEvent),
    NetworkCharacteristicsUpdate(NetworkCharacteristicsUpdate),
    PoasInRange(PoasInRangeEvent),
}

/// Decode the envelope strictly against the declared discriminant: exactly
/// the declared variant must be populated.
fn event_payload(kind: EventKind, envelope: EventEnvelope) -> Result<EventPayload, CtrlError> {
    let EventEnvelope {
        mobility,
        network_characteristics_update,
        poas_in_range,
        ..
    } = envelope;
    let populated = [
        mobility.is_some(),
        network_characteristics_update.is_some(),
        poas_in_range.is_some(),
    ]
    .into_iter()
    .filter(|p| *p)
    .count();
    if populated > 1 {
        return Err(CtrlError::bad_request(
            "malformed request: multiple event payloads",
        ));
    }
    match kind {
        EventKind::Mobility => mobility.map(EventPayload::Mobility),
        EventKind::NetworkCharacteristicsUpdate => {
            network_characteristics_update.map(EventPayload::NetworkCharacteristicsUpdate)
        }
        EventKind::PoasInRange => poas_in_range.map(EventPayload::PoasInRange),
    }
    .ok_or_else(|| {
        CtrlError::BadRequest(format!(
            "malformed request: missing {} payload",
            kind.as_str()
        ))
    })
}

impl Engine {
    /// Validate and apply one event. The discriminant is checked first (an
    /// unknown value is a client error whether or not a scenario is active);
    /// dispatch then requires an active scenario. On success the event is
    /// recorded as a metric, best-effort.
    pub async fn process_event(&self, kind: &str, envelope: EventEnvelope) -> Result<(), CtrlError> {
        let kind = EventKind::parse(kind)
            .ok_or_else(|| CtrlError::bad_request("unsupported event type"))?;

        let state = self.active.read().await;
        if !state.active {
            return Err(CtrlError::NoActiveScenario);
        }

        let recorded = envelope.clone();
        match event_payload(kind, envelope)? {
            EventPayload::Mobility(ev) => self.apply_mobility(ev).await?,
            EventPayload::NetworkCharacteristicsUpdate(ev) => {
                self.topology.update_net_char(&ev).await?
            }
            EventPayload::PoasInRange(ev) => self.apply_poas_in_range(ev).await?,
        }
        drop(state);

        if let Err(err) = self
            .metrics
            .record_event(
                kind.as_str(),
                &serde_json::to_value(&recorded).unwrap_or_default(),
            )
            .await
        {
            warn!(%err, "failed to record event metric");
        }
        Ok(())
    }

    async fn apply_mobility(&self, ev: MobilityEvent) -> Result<(), CtrlError> {
        let moved = self.topology.move_node(&ev.element_name, &ev.dest).await?;
        info!(
            element = %ev.element_name,
            old_parent = %moved.old_parent,
            new_parent = %moved.new_parent,
            "mobility event applied"
        );
        Ok(())
    }

    /// Canonicalize the incoming POA list by sorting, then compare it
    /// positionally against the stored list (kept sorted on write). An equal
    /// set is a deliberate no-op: no store write, no republish.
    async fn apply_poas_in_range(&self, ev: PoasInRangeEvent) -> Result<(), CtrlError> {
        let mut poas = ev.poas_in_range;
        poas.sort();

        let current = self
            .topology
            .ue_poas_in_range(&ev.ue)
            .await?
            .ok_or_else(|| CtrlError::NotFound(format!("ue '{}'", ev.ue)))?;

        if poas == current {
            debug!(ue = %ev.ue, "poa list unchanged, ignoring");
            return Ok(());
        }

        self.topology.set_ue_poas_in_range(&ev.ue, poas).await?;
        self.topology.republish().await?;
        debug!(ue = %ev.ue, "poa list updated and republished");
        Ok(())
    }
}
