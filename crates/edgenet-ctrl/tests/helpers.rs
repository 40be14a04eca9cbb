#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use edgenet_ctrl::http::{HttpState, api};
use edgenet_ctrl::stores::{MemBackends, ScenarioStore};
use edgenet_ctrl::{CtrlConfig, Engine};
use edgenet_types::{EgressService, IngressService, NodeServiceMaps, ScenarioDoc};

pub fn engine_with_backends() -> (Arc<Engine>, MemBackends) {
    let backends = MemBackends::new();
    let engine = Arc::new(Engine::with_backends(CtrlConfig::default(), &backends));
    (engine, backends)
}

/// A scenario document with some opaque content alongside the name.
pub fn scenario_doc(name: &str) -> ScenarioDoc {
    let mut doc = ScenarioDoc::new(name);
    doc.content.insert(
        "deployment".into(),
        serde_json::json!({ "domains": [{ "name": "operator1" }] }),
    );
    doc
}

pub async fn seed_and_activate(engine: &Engine, backends: &MemBackends, name: &str) {
    backends
        .scenarios
        .put(name, scenario_doc(name))
        .await
        .expect("seed scenario");
    engine.activate(name).await.expect("activate scenario");
}

/// Two-node fixture: node A serves ingress "svc1", node B fronts egress
/// "svc2" aliased "alt2".
pub fn two_node_service_maps() -> Vec<NodeServiceMaps> {
    vec![
        NodeServiceMaps {
            node: "nodeA".into(),
            ingress_service_map: vec![IngressService {
                name: "svc1".into(),
                port: Some(8080),
                external_port: Some(31111),
                protocol: Some("TCP".into()),
            }],
            egress_service_map: vec![],
        },
        NodeServiceMaps {
            node: "nodeB".into(),
            ingress_service_map: vec![],
            egress_service_map: vec![EgressService {
                name: "svc2".into(),
                me_svc_name: Some("alt2".into()),
                ip: Some("10.0.0.2".into()),
                port: Some(9090),
                protocol: Some("UDP".into()),
            }],
        },
    ]
}

/// Serve the API over an ephemeral port, returning its address.
pub async fn spawn_api(engine: Arc<Engine>) -> SocketAddr {
    let app = axum::Router::new()
        .nest("/v1", api::router())
        .with_state(HttpState::new(engine));
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}
