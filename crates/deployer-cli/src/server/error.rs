//! API error types for HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deployer_core::Error as CoreError;
use serde::Serialize;

/// Structured API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.code {
            "ARTIFACT_NOT_FOUND" | "NOT_FOUND" => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code, message = %self.message, "request failed");
        } else {
            tracing::warn!(code = self.code, message = %self.message, "request failed");
        }

        (status, Json(self)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = err.code();

        // Don't leak OS error details
        let message = match err {
            CoreError::Io(_) => "Failed to read contract artifacts".to_string(),
            other => other.to_string(),
        };

        Self { code, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_status_codes() {
        let missing = ApiError::from(CoreError::ArtifactNotFound(PathBuf::from(
            "build/MyContract.abi",
        )));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.code, "ARTIFACT_NOT_FOUND");

        let malformed = ApiError::from(CoreError::AbiParse("expected value".into()));
        assert_eq!(malformed.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(malformed.code, "ABI_PARSE_ERROR");

        let io = ApiError::from(CoreError::Io(std::io::Error::other("disk on fire")));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(io.message, "Failed to read contract artifacts");
    }
}
