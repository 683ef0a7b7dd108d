//! engine-forge — standalone REST server entry point.
//!
//! Reads config from env vars:
//!   ENGINE_FORGE_BIND_ADDR — listen address (default: 0.0.0.0:8000)
//!   RUST_LOG               — tracing filter (default: info,engine_forge=debug)

use std::net::SocketAddr;

use engine_forge::router::build_router;
use engine_forge::services::TemplateService;
use engine_forge::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,engine_forge=debug".into()),
        )
        .init();

    let bind_addr =
        std::env::var("ENGINE_FORGE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let state = AppState::new(TemplateService::new());
    let app = build_router(state);

    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", bind_addr, e);
            return Err(format!("Failed to bind to {}: {}", bind_addr, e).into());
        }
    };

    tracing::info!("engine-forge listening on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /                - Greeting");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  POST /engine-template - Generate starter archive");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
