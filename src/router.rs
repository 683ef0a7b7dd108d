//! Router construction for the engine template service.

use axum::{
    body::Bytes,
    http::{header, Response, StatusCode},
    middleware as axum_mw,
    routing::{get, post},
    Router,
};
use http_body_util::Full;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};

use crate::handlers;
use crate::middleware::request_log::log_requests;
use crate::state::AppState;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::health::health))
        .route(
            "/engine-template",
            post(handlers::engine_template::create_engine_template),
        )
        .with_state(state)
        .layer(axum_mw::from_fn(log_requests))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

/// Last-resort handler: anything that panics inside the stack becomes an
/// opaque 500. The full detail is logged server-side only.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response<Full<Bytes>> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };
    tracing::error!("Unhandled panic while serving request: {detail}");

    let body = serde_json::json!({ "message": "Internal server error" }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body)))
        .expect("panic response is valid")
}
