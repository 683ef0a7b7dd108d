//! GET / — greeting endpoint.

use axum::Json;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
pub struct GreetingResponse {
    message: String,
}

pub async fn root() -> Json<GreetingResponse> {
    info!("Root endpoint accessed");
    Json(GreetingResponse {
        message: "Hello World".to_string(),
    })
}
