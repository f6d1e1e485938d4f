use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::dispatch::{Operation, execute};
use super::dto::HealthResponse;
use super::state::AppState;
use super::{AMZ_JSON_CONTENT_TYPE, AMZ_TARGET_HEADER, Result};
use crate::core::CatalogError;

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Single entry point for every catalog operation.
pub async fn dispatch(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    let target = headers
        .get(AMZ_TARGET_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            CatalogError::InvalidParameters("X-Amz-Target header is required".to_string())
        })?;
    let operation = Operation::from_target(target)?;

    let (region, backend) = state.backend_for(&headers)?;
    debug!(%region, operation = operation.name(), "dispatching request");

    let payload = {
        let mut backend = backend.lock().await;
        execute(&mut backend, operation, &body)?
    };
    let body = serde_json::to_vec(&payload)?;

    Ok(([(header::CONTENT_TYPE, AMZ_JSON_CONTENT_TYPE)], body).into_response())
}
