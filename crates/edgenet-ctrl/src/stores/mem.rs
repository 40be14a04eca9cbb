//! In-memory collaborator backends. These are the default wiring for local
//! daemons and the fixture layer for tests; production deployments swap in
//! networked implementations of the same traits.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use edgenet_types::{NetworkCharacteristicsUpdate, NodeMove, NodeServiceMaps, ScenarioDoc};

use super::{
    EntryVisitor, HealthStore, MetricSink, ScenarioStore, StoreError, StoreResult, TopologyModel,
    Watchdog,
};

/// Scenario documents held in a map keyed by name.
#[derive(Default)]
pub struct MemScenarioStore {
    docs: Mutex<BTreeMap<String, ScenarioDoc>>,
}

impl MemScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScenarioStore for MemScenarioStore {
    async fn get(&self, name: &str) -> StoreResult<ScenarioDoc> {
        let docs = self.docs.lock().unwrap();
        docs.get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("scenario '{name}'")))
    }

    async fn put(&self, name: &str, doc: ScenarioDoc) -> StoreResult<()> {
        let mut docs = self.docs.lock().unwrap();
        if docs.contains_key(name) {
            return Err(StoreError::Conflict(format!("scenario '{name}'")));
        }
        docs.insert(name.to_string(), doc);
        Ok(())
    }

    async fn update(&self, name: &str, doc: ScenarioDoc) -> StoreResult<()> {
        let mut docs = self.docs.lock().unwrap();
        if !docs.contains_key(name) {
            return Err(StoreError::NotFound(format!("scenario '{name}'")));
        }
        docs.insert(name.to_string(), doc);
        Ok(())
    }

    async fn remove(&self, name: &str) -> StoreResult<()> {
        let mut docs = self.docs.lock().unwrap();
        docs.remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("scenario '{name}'")))
    }

    async fn remove_all(&self) -> StoreResult<()> {
        self.docs.lock().unwrap().clear();
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<ScenarioDoc>> {
        Ok(self.docs.lock().unwrap().values().cloned().collect())
    }
}

#[derive(Default, Clone)]
struct TopologyGraph {
    /// element -> parent network location.
    elements: HashMap<String, String>,
    /// UE -> sorted visible POA list.
    ues: HashMap<String, Vec<String>>,
}

#[derive(Default)]
struct TopologyInner {
    doc: Option<ScenarioDoc>,
    /// Seeded graph, cloned into `live` on activation so mutations from one
    /// activation never leak into the next.
    baseline: TopologyGraph,
    live: TopologyGraph,
    service_maps: Vec<NodeServiceMaps>,
    publish_count: u64,
}

/// Topology model over a seedable node registry. Tests and the local daemon
/// register elements, UEs and service maps up front; activation snapshots the
/// registry into live state.
#[derive(Default)]
pub struct MemTopologyModel {
    inner: Mutex<TopologyInner>,
}

impl MemTopologyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a movable element under its parent network location.
    pub fn insert_element(&self, name: &str, parent: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .baseline
            .elements
            .insert(name.to_string(), parent.to_string());
    }

    /// Register a UE under its parent, with an initial visible-POA list.
    /// The list is stored sorted.
    pub fn insert_ue(&self, name: &str, parent: &str, poas: &[&str]) {
        let mut sorted: Vec<String> = poas.iter().map(|p| p.to_string()).collect();
        sorted.sort();
        let mut inner = self.inner.lock().unwrap();
        inner
            .baseline
            .elements
            .insert(name.to_string(), parent.to_string());
        inner.baseline.ues.insert(name.to_string(), sorted);
    }

    pub fn set_service_maps(&self, maps: Vec<NodeServiceMaps>) {
        self.inner.lock().unwrap().service_maps = maps;
    }

    /// Number of publications observed by dependents.
    pub fn publish_count(&self) -> u64 {
        self.inner.lock().unwrap().publish_count
    }

    /// Currently stored POA list for a live UE.
    pub fn live_ue_poas(&self, name: &str) -> Option<Vec<String>> {
        self.inner.lock().unwrap().live.ues.get(name).cloned()
    }
}

#[async_trait]
impl TopologyModel for MemTopologyModel {
    async fn activate(&self, doc: &ScenarioDoc) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.doc = Some(doc.clone());
        inner.live = inner.baseline.clone();
        inner.publish_count += 1;
        Ok(())
    }

    async fn deactivate(&self) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.doc = None;
        inner.live = TopologyGraph::default();
        Ok(())
    }

    async fn scenario(&self) -> StoreResult<ScenarioDoc> {
        let inner = self.inner.lock().unwrap();
        inner
            .doc
            .clone()
            .ok_or_else(|| StoreError::backend("no scenario content loaded"))
    }

    async fn move_node(&self, element: &str, dest: &str) -> StoreResult<NodeMove> {
        let mut inner = self.inner.lock().unwrap();
        let parent = inner
            .live
            .elements
            .get_mut(element)
            .ok_or_else(|| StoreError::backend(format!("unknown element '{element}'")))?;
        let old_parent = std::mem::replace(parent, dest.to_string());
        inner.publish_count += 1;
        Ok(NodeMove {
            old_parent,
            new_parent: dest.to_string(),
        })
    }

    async fn update_net_char(&self, update: &NetworkCharacteristicsUpdate) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.live.elements.contains_key(&update.element_name) {
            return Err(StoreError::backend(format!(
                "unknown element '{}'",
                update.element_name
            )));
        }
        inner.publish_count += 1;
        Ok(())
    }

    async fn ue_poas_in_range(&self, name: &str) -> StoreResult<Option<Vec<String>>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.live.ues.get(name).cloned())
    }

    async fn set_ue_poas_in_range(&self, name: &str, poas: Vec<String>) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.live.ues.get_mut(name) {
            Some(current) => {
                *current = poas;
                Ok(())
            }
            None => Err(StoreError::backend(format!("unknown ue '{name}'"))),
        }
    }

    async fn republish(&self) -> StoreResult<()> {
        self.inner.lock().unwrap().publish_count += 1;
        Ok(())
    }

    async fn service_maps(&self) -> StoreResult<Vec<NodeServiceMaps>> {
        Ok(self.inner.lock().unwrap().service_maps.clone())
    }
}

/// Health store over a sorted key map with `*`-wildcard pattern scans.
#[derive(Default)]
pub struct MemHealthStore {
    entries: Mutex<BTreeMap<String, HashMap<String, String>>>,
    fail_scans: AtomicBool,
}

impl MemHealthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, fields: &[(&str, &str)]) {
        let map = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.entries.lock().unwrap().insert(key.to_string(), map);
    }

    /// Force subsequent scans to fail, for exercising error paths.
    pub fn set_fail_scans(&self, fail: bool) {
        self.fail_scans.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl HealthStore for MemHealthStore {
    async fn for_each_entry(
        &self,
        pattern: &str,
        visit: &mut EntryVisitor<'_>,
    ) -> StoreResult<()> {
        if self.fail_scans.load(Ordering::Relaxed) {
            return Err(StoreError::backend("health store scan failed"));
        }
        let entries = self.entries.lock().unwrap().clone();
        for (key, fields) in &entries {
            if wildcard_match(pattern, key) {
                visit(key, fields)?;
            }
        }
        Ok(())
    }
}

/// Match `pattern` (with `*` wildcards) against `key`.
fn wildcard_match(pattern: &str, key: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    if parts.len() == 1 {
        return pattern == key;
    }
    let mut pos = 0;
    let last = parts.len() - 1;
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 {
            if !key.starts_with(part) {
                return false;
            }
            pos = part.len();
        } else if i == last {
            let rest = &key[pos..];
            return rest.len() >= part.len() && rest.ends_with(part);
        } else {
            match key[pos..].find(part) {
                Some(idx) => pos += idx + part.len(),
                None => return false,
            }
        }
    }
    true
}

/// Watchdog with a settable heartbeat state.
pub struct MemWatchdog {
    alive: AtomicBool,
}

impl MemWatchdog {
    pub fn new(alive: bool) -> Self {
        Self {
            alive: AtomicBool::new(alive),
        }
    }

    pub fn set_alive(&self, alive: bool) {
        self.alive.store(alive, Ordering::Relaxed);
    }
}

#[async_trait]
impl Watchdog for MemWatchdog {
    async fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Metric sink that records scope changes and events for inspection.
#[derive(Default)]
pub struct MemMetricSink {
    scope: Mutex<String>,
    events: Mutex<Vec<(String, serde_json::Value)>>,
    fail_scope: AtomicBool,
    fail_events: AtomicBool,
}

impl MemMetricSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> String {
        self.scope.lock().unwrap().clone()
    }

    pub fn recorded_events(&self) -> Vec<(String, serde_json::Value)> {
        self.events.lock().unwrap().clone()
    }

    pub fn set_fail_scope(&self, fail: bool) {
        self.fail_scope.store(fail, Ordering::Relaxed);
    }

    pub fn set_fail_events(&self, fail: bool) {
        self.fail_events.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl MetricSink for MemMetricSink {
    async fn set_scope(&self, scope: &str) -> StoreResult<()> {
        if self.fail_scope.load(Ordering::Relaxed) {
            return Err(StoreError::backend("metric scope reset failed"));
        }
        *self.scope.lock().unwrap() = scope.to_string();
        Ok(())
    }

    async fn record_event(&self, kind: &str, payload: &serde_json::Value) -> StoreResult<()> {
        if self.fail_events.load(Ordering::Relaxed) {
            return Err(StoreError::backend("event metric write failed"));
        }
        self.events
            .lock()
            .unwrap()
            .push((kind.to_string(), payload.clone()));
        Ok(())
    }
}

/// Full set of in-memory backends, kept as concrete handles so callers can
/// seed fixtures and inspect side effects.
#[derive(Clone)]
pub struct MemBackends {
    pub scenarios: Arc<MemScenarioStore>,
    pub topology: Arc<MemTopologyModel>,
    pub health: Arc<MemHealthStore>,
    pub watchdog: Arc<MemWatchdog>,
    pub metrics: Arc<MemMetricSink>,
}

impl MemBackends {
    pub fn new() -> Self {
        Self {
            scenarios: Arc::new(MemScenarioStore::new()),
            topology: Arc::new(MemTopologyModel::new()),
            health: Arc::new(MemHealthStore::new()),
            watchdog: Arc::new(MemWatchdog::new(true)),
            metrics: Arc::new(MemMetricSink::new()),
        }
    }
}

impl Default for MemBackends {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_match_anchors_prefix_and_suffix() {
        assert!(wildcard_match("mon:pod:core:*", "mon:pod:core:ctrl-0"));
        assert!(!wildcard_match("mon:pod:core:*", "other:pod:core:ctrl-0"));
        assert!(wildcard_match("*:core:*", "mon:pod:core:ctrl-0"));
        assert!(wildcard_match("mon*core*0", "mon:pod:core:ctrl-0"));
        assert!(!wildcard_match("mon*core*9", "mon:pod:core:ctrl-0"));
        assert!(wildcard_match("exact", "exact"));
        assert!(!wildcard_match("exact", "exactly"));
    }

    #[tokio::test]
    async fn topology_activation_resets_live_state() {
        let topo = MemTopologyModel::new();
        topo.insert_ue("ue1", "poa1", &["poa1", "poa2"]);
        let doc = ScenarioDoc::new("demo");

        topo.activate(&doc).await.unwrap();
        topo.set_ue_poas_in_range("ue1", vec!["poa9".into()])
            .await
            .unwrap();
        assert_eq!(topo.live_ue_poas("ue1"), Some(vec!["poa9".to_string()]));

        topo.deactivate().await.unwrap();
        assert_eq!(topo.live_ue_poas("ue1"), None);

        // Reactivation starts from the seeded baseline, not the mutated state.
        topo.activate(&doc).await.unwrap();
        assert_eq!(
            topo.live_ue_poas("ue1"),
            Some(vec!["poa1".to_string(), "poa2".to_string()])
        );
    }
}
