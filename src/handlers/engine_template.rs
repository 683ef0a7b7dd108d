//! POST /engine-template — build and download a starter-project archive.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::error::{AppError, TemplateGenerationError, ValidationError};
use crate::model::EngineTemplateRequest;
use crate::state::AppState;

pub async fn create_engine_template(
    State(state): State<AppState>,
    Json(request): Json<EngineTemplateRequest>,
) -> Result<Response, AppError> {
    let params = request.validate()?;

    // Resolve the download filename up front: a name that cannot be carried
    // in a header is a request problem, not a generation problem.
    let filename = format!("{}-game-engine.zip", params.engine_name);
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|_| ValidationError {
            field: "engine_name",
        })?;

    info!("Engine template requested for '{}'", params.engine_name);

    let archive = state.templates.create_engine_template(&params).await?;
    let bytes = tokio::fs::read(&archive.path).await.map_err(|e| {
        TemplateGenerationError::ReadArchive {
            path: archive.path.clone(),
            source: e,
        }
    })?;
    // The scratch directory is removed here, once the bytes are in memory.
    drop(archive);

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/zip"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
