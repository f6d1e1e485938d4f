//! AWS JSON 1.1 front end for the catalog backends.
//!
//! Requests arrive as `POST /` with the operation named in `X-Amz-Target`.
//! This layer only extracts parameters, picks the region backend and
//! serializes results; catalog rules live in [`crate::storage`].

pub mod app;
pub mod dispatch;
pub mod dto;
pub mod handlers;
pub mod region;
pub mod state;

use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::core::CatalogError;

pub use app::build_router;
pub use dispatch::{Operation, execute};
pub use state::AppState;

pub const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub const AMZ_TARGET_HEADER: HeaderName = HeaderName::from_static("x-amz-target");
pub const AMZ_ERROR_TYPE_HEADER: HeaderName = HeaderName::from_static("x-amzn-errortype");

/// Error body in the shape AWS SDKs parse for JSON protocols.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "__type")]
    pub error_type: String,
    pub message: String,
}

#[derive(Debug)]
pub enum WebError {
    Catalog(CatalogError),
    Internal(String),
}

impl From<CatalogError> for WebError {
    fn from(err: CatalogError) -> Self {
        WebError::Catalog(err)
    }
}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        WebError::Internal(err.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            WebError::Catalog(err) => (StatusCode::BAD_REQUEST, err.code(), err.to_string()),
            WebError::Internal(msg) => {
                error!(error = %msg, "internal failure while serving request");
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalFailure", msg)
            }
        };

        let body = ErrorResponse {
            error_type: error_type.to_string(),
            message,
        };
        let body = serde_json::to_vec(&body).unwrap_or_default();

        (
            status,
            [
                (header::CONTENT_TYPE, AMZ_JSON_CONTENT_TYPE),
                (AMZ_ERROR_TYPE_HEADER, error_type),
            ],
            body,
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_client_error_with_type() {
        let response =
            WebError::from(CatalogError::PortfolioNotFound("port-x".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(AMZ_ERROR_TYPE_HEADER).unwrap(),
            "ResourceNotFoundException"
        );
    }

    #[test]
    fn internal_maps_to_server_error() {
        let response = WebError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
