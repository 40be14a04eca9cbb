pub mod api;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::config::HttpServerConfig;
use crate::engine::Engine;

#[derive(Clone)]
pub struct HttpState {
    pub engine: Arc<Engine>,
}

impl HttpState {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }
}

pub fn spawn_http_server(
    config: HttpServerConfig,
    engine: Arc<Engine>,
    shutdown_tx: broadcast::Sender<()>,
) -> Option<JoinHandle<()>> {
    if !config.enabled {
        return None;
    }
    let app = Router::new()
        .nest("/v1", api::router())
        .with_state(HttpState::new(engine));

    Some(tokio::spawn(async move {
        let addr = config.bind;
        if let Err(err) = serve(addr, app, shutdown_tx).await {
            tracing::error!("http server error: {err}");
        }
    }))
}

async fn serve(
    addr: SocketAddr,
    app: Router,
    shutdown_tx: broadcast::Sender<()>,
) -> Result<(), String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr}: {e}"))?;
    tracing::info!("HTTP server listening on http://{}", addr);
    let mut shutdown_rx = shutdown_tx.subscribe();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .map_err(|e| format!("serve {addr}: {e}"))
}
