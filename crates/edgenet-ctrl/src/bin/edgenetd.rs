//! Control-engine daemon. Serves the HTTP control surface over the engine;
//! collaborator backends default to the in-memory implementations, with the
//! store traits as the seam for networked deployments.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use edgenet_ctrl::engine::Engine;
use edgenet_ctrl::http::spawn_http_server;
use edgenet_ctrl::stores::MemBackends;
use edgenet_ctrl::CtrlConfig;

#[derive(Parser, Debug)]
#[command(name = "edgenetd", version, about = "Edge-network emulation control engine")]
struct Cli {
    /// Address for the HTTP control surface.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let mut config = CtrlConfig::from_env();
    if let Some(bind) = cli.bind {
        config.http.bind = bind;
    }

    let backends = MemBackends::new();
    let engine = Arc::new(Engine::with_backends(config.clone(), &backends));

    let (shutdown_tx, _) = broadcast::channel::<()>(1);
    let http_handle = spawn_http_server(config.http, engine, shutdown_tx.clone());

    let ctrlc_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            let _ = ctrlc_tx.send(());
        }
    });

    if let Some(handle) = http_handle {
        handle.await?;
    }
    Ok(())
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}
