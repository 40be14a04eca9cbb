use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use edgenet_types::{EventEnvelope, PodsStatus, ScenarioDoc};
use serde::Deserialize;

use crate::engine::ServiceMapFilter;
use crate::error::CtrlError;
use crate::http::HttpState;

pub fn router() -> Router<HttpState> {
    Router::new()
        .route("/scenarios", get(scenario_list).delete(scenario_delete_all))
        .route(
            "/scenarios/{name}",
            post(scenario_create)
                .get(scenario_get)
                .put(scenario_update)
                .delete(scenario_delete),
        )
        .route("/active", get(active_get).delete(active_delete))
        .route("/active/{name}", post(active_post))
        .route("/active/serviceMaps", get(service_maps_get))
        .route("/events/{type}", post(event_post))
        .route("/states", get(states_get))
}

#[derive(Debug)]
struct ApiError(CtrlError);

impl ApiError {
    fn bad_request(msg: impl Into<String>) -> Self {
        ApiError(CtrlError::BadRequest(msg.into()))
    }
}

impl From<CtrlError> for ApiError {
    fn from(err: CtrlError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            CtrlError::AlreadyActive | CtrlError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            CtrlError::NoActiveScenario | CtrlError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            CtrlError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            CtrlError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        let body = serde_json::json!({ "code": code, "message": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("request body is missing"));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(format!("decode json: {e}")))
}

// --- scenario store ------------------------------------------------------

async fn scenario_create(
    State(state): State<HttpState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let doc: ScenarioDoc = parse_body(&body)?;
    state.engine.create_scenario(&name, doc).await?;
    Ok(StatusCode::OK)
}

async fn scenario_get(
    State(state): State<HttpState>,
    Path(name): Path<String>,
) -> Result<Json<ScenarioDoc>, ApiError> {
    Ok(Json(state.engine.get_scenario(&name).await?))
}

async fn scenario_list(
    State(state): State<HttpState>,
) -> Result<Json<Vec<ScenarioDoc>>, ApiError> {
    Ok(Json(state.engine.list_scenarios().await?))
}

async fn scenario_update(
    State(state): State<HttpState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let doc: ScenarioDoc = parse_body(&body)?;
    state.engine.update_scenario(&name, doc).await?;
    Ok(StatusCode::OK)
}

async fn scenario_delete(
    State(state): State<HttpState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.engine.delete_scenario(&name).await?;
    Ok(StatusCode::OK)
}

async fn scenario_delete_all(
    State(state): State<HttpState>,
) -> Result<impl IntoResponse, ApiError> {
    state.engine.delete_all_scenarios().await?;
    Ok(StatusCode::OK)
}

// --- activation lifecycle ------------------------------------------------

async fn active_post(
    State(state): State<HttpState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.engine.activate(&name).await?;
    Ok(StatusCode::OK)
}

async fn active_get(State(state): State<HttpState>) -> Result<Json<ScenarioDoc>, ApiError> {
    Ok(Json(state.engine.active_scenario().await?))
}

async fn active_delete(State(state): State<HttpState>) -> Result<impl IntoResponse, ApiError> {
    state.engine.deactivate().await?;
    Ok(StatusCode::OK)
}

#[derive(Debug, Deserialize)]
struct ServiceMapsQuery {
    #[serde(default)]
    node: String,
    /// Direction filter; historical wire name is `type`.
    #[serde(default, rename = "type")]
    direction: String,
    #[serde(default)]
    service: String,
}

async fn service_maps_get(
    State(state): State<HttpState>,
    Query(query): Query<ServiceMapsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = ServiceMapFilter {
        node: query.node,
        direction: query.direction,
        service: query.service,
    };
    let maps = state.engine.service_maps(&filter).await?;
    Ok(Json(maps))
}

// --- events ---------------------------------------------------------------

async fn event_post(
    State(state): State<HttpState>,
    Path(kind): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let envelope: EventEnvelope = parse_body(&body)?;
    state.engine.process_event(&kind, envelope).await?;
    Ok(StatusCode::OK)
}

// --- pod states ------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct StatesQuery {
    #[serde(default)]
    long: String,
    #[serde(default, rename = "type")]
    kind: String,
}

async fn states_get(
    State(state): State<HttpState>,
    Query(query): Query<StatesQuery>,
) -> Result<Json<PodsStatus>, ApiError> {
    let detailed = query.long == "true";
    Ok(Json(state.engine.pod_states(detailed, &query.kind).await?))
}
