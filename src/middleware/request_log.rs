//! Request logging middleware.
//!
//! Emits one line when a request is received (method, path, client address)
//! and one when it completes (status, elapsed time).

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    // ConnectInfo is only present when the server is started with
    // into_make_service_with_connect_info; router-level tests run without it.
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    info!("Request received - Method: {method} Path: {path} Client: {client}");

    let response = next.run(request).await;

    info!(
        "Request completed in {:.4}s - Status: {}",
        started.elapsed().as_secs_f64(),
        response.status()
    );
    response
}
