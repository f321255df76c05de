//! Error types for the portal list API
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Portal Error Enum ==
/// Unified error type for the list pipeline and its adapters.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Persistence adapter failure during count or fetch
    #[error("store error: {0}")]
    Store(String),

    /// Persistence adapter did not answer within the configured timeout
    #[error("store timed out after {0:?}")]
    StoreTimeout(Duration),

    /// Response payload could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == IntoResponse Implementation ==
/// Every pipeline failure maps to the same opaque 500 envelope. The real
/// cause is logged here and never leaked to the client.
impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        error!(error = %self, "list request failed");

        let body = Json(json!({
            "message": "Internal server error"
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the portal service.
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_error_maps_to_opaque_500() {
        let response = PortalError::Store("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Internal server error");
        // The underlying cause must not reach the wire
        assert!(!json.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_timeout_error_maps_to_500() {
        let response = PortalError::StoreTimeout(Duration::from_secs(5)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
