mod helpers;

use helpers::{engine_with_backends, scenario_doc, spawn_api, two_node_service_maps};
use reqwest::StatusCode;

#[tokio::test]
async fn scenario_crud_and_activation_lifecycle_over_http() {
    let (engine, backends) = engine_with_backends();
    backends.topology.set_service_maps(two_node_service_maps());
    let addr = spawn_api(engine).await;
    let base = format!("http://{addr}/v1");
    let client = reqwest::Client::new();

    // Create, duplicate create conflicts.
    let doc = serde_json::to_value(scenario_doc("demo")).unwrap();
    let resp = client
        .post(format!("{base}/scenarios/demo"))
        .json(&doc)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = client
        .post(format!("{base}/scenarios/demo"))
        .json(&doc)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Missing body is a client error.
    let resp = client
        .post(format!("{base}/scenarios/empty"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Read back, list, update.
    let resp = reqwest::get(format!("{base}/scenarios/demo")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = reqwest::get(format!("{base}/scenarios/ghost")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = reqwest::get(format!("{base}/scenarios")).await.unwrap();
    let list: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
    let resp = client
        .put(format!("{base}/scenarios/demo"))
        .json(&doc)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = client
        .put(format!("{base}/scenarios/ghost"))
        .json(&doc)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Nothing active yet.
    let resp = reqwest::get(format!("{base}/active")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = reqwest::get(format!("{base}/active/serviceMaps")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Activate; a second activation is refused.
    let resp = client
        .post(format!("{base}/active/demo"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = client
        .post(format!("{base}/active/demo"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = reqwest::get(format!("{base}/active")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "demo");

    let resp = reqwest::get(format!("{base}/active/serviceMaps?service=alt2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let maps: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(maps[0]["node"], "nodeB");

    // Deactivate; repeat fails.
    let resp = client
        .delete(format!("{base}/active"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = client
        .delete(format!("{base}/active"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Store cleanup: delete one, then all.
    let resp = client
        .delete(format!("{base}/scenarios/demo"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = client
        .delete(format!("{base}/scenarios/demo"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = client
        .delete(format!("{base}/scenarios"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn activating_an_unknown_scenario_is_not_found() {
    let (engine, _backends) = engine_with_backends();
    let addr = spawn_api(engine).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/v1/active/ghost"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn event_endpoint_maps_failures_to_statuses() {
    let (engine, backends) = engine_with_backends();
    backends.topology.insert_ue("ue1", "poa1", &["ap1"]);
    let addr = spawn_api(engine).await;
    let base = format!("http://{addr}/v1");
    let client = reqwest::Client::new();

    // Unsupported type is 400 even with nothing active.
    let resp = client
        .post(format!("{base}/events/UE-MEASUREMENT"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Known type without an active scenario is 404.
    let mobility = serde_json::json!({
        "mobility": { "elementName": "ue1", "dest": "poa2" }
    });
    let resp = client
        .post(format!("{base}/events/MOBILITY"))
        .json(&mobility)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let doc = serde_json::to_value(scenario_doc("demo")).unwrap();
    client
        .post(format!("{base}/scenarios/demo"))
        .json(&doc)
        .send()
        .await
        .unwrap();
    client
        .post(format!("{base}/active/demo"))
        .send()
        .await
        .unwrap();

    // Missing variant payload.
    let resp = client
        .post(format!("{base}/events/MOBILITY"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // POA event against an unknown UE.
    let resp = client
        .post(format!("{base}/events/POAS-IN-RANGE"))
        .json(&serde_json::json!({
            "poasInRange": { "ue": "ghost", "poasInRange": ["ap1"] }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // A valid POA update succeeds.
    let resp = client
        .post(format!("{base}/events/POAS-IN-RANGE"))
        .json(&serde_json::json!({
            "poasInRange": { "ue": "ue1", "poasInRange": ["ap2", "ap1"] }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        backends.topology.live_ue_poas("ue1"),
        Some(vec!["ap1".to_string(), "ap2".to_string()])
    );
}

#[tokio::test]
async fn states_endpoint_reports_core_components() {
    let (engine, backends) = engine_with_backends();
    let addr = spawn_api(engine).await;

    let resp = reqwest::get(format!("http://{addr}/v1/states?type=core&long=false"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    let pods = body["podStatus"].as_array().unwrap();
    assert_eq!(pods.len(), edgenet_ctrl::CORE_PODS.len());

    backends.health.set_fail_scans(true);
    let resp = reqwest::get(format!("http://{addr}/v1/states"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
