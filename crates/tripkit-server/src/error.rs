//! Server error types and HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("City '{0}' not found")]
    CityNotFound(String),

    /// OpenWeather rejected our credentials; surfaced with its own status so
    /// operators can tell a bad deployment key from an upstream outage.
    #[error("Invalid OpenWeather API key")]
    InvalidApiKey,

    #[error("Upstream request timed out: {0}")]
    UpstreamTimeout(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] tripkit_core::TripKitError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::CityNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ServerError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServerError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServerError::Config(_) | ServerError::Core(_) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ServerError::CityNotFound(_) => "CITY_NOT_FOUND",
            ServerError::InvalidApiKey => "INVALID_API_KEY",
            ServerError::UpstreamTimeout(_) => "UPSTREAM_TIMEOUT",
            ServerError::Upstream(_) => "UPSTREAM_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::Core(_) => "CORE_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::CityNotFound("Atlantis".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ServerError::InvalidApiKey.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ServerError::UpstreamTimeout("weather".into()).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ServerError::Upstream("bad body".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
