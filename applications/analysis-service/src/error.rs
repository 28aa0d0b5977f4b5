/// Server error types
use crate::services::analysis::AnalysisError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use userhub_directory_client::DirectoryClientError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("User not found")]
    NotFound,

    #[error("Directory service connection error: {0}")]
    DependencyUnavailable(String),

    #[error("Invalid user data from directory service: {0}")]
    InvalidUpstreamData(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<DirectoryClientError> for ServerError {
    fn from(err: DirectoryClientError) -> Self {
        match err {
            DirectoryClientError::NotFound => ServerError::NotFound,
            DirectoryClientError::Unreachable(msg) => {
                tracing::warn!("Directory unreachable: {}", msg);
                ServerError::DependencyUnavailable(msg)
            }
            DirectoryClientError::InvalidResponse(msg) => ServerError::InvalidUpstreamData(msg),
            DirectoryClientError::Rejected { status, message }
            | DirectoryClientError::ServerError { status, message } => {
                ServerError::InvalidUpstreamData(format!("status {}: {}", status, message))
            }
            DirectoryClientError::InvalidUrl(msg) => ServerError::Config(msg),
        }
    }
}

impl From<AnalysisError> for ServerError {
    fn from(err: AnalysisError) -> Self {
        ServerError::InvalidUpstreamData(err.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::NotFound | ServerError::RouteNotFound => StatusCode::NOT_FOUND,
            ServerError::DependencyUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::InvalidUpstreamData(_) => StatusCode::BAD_GATEWAY,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error_message = match self {
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Configuration error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status_mapping() {
        let cases = [
            (DirectoryClientError::NotFound, StatusCode::NOT_FOUND),
            (
                DirectoryClientError::Unreachable("connection refused".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                DirectoryClientError::InvalidResponse("missing field `name`".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                DirectoryClientError::ServerError {
                    status: 500,
                    message: "boom".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            let response = ServerError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(ServerError::NotFound.to_string(), "User not found");
        assert!(ServerError::DependencyUnavailable("refused".into())
            .to_string()
            .contains("connection error"));
    }

    #[test]
    fn test_config_errors_are_internal() {
        let err = ServerError::from(DirectoryClientError::InvalidUrl("bad".into()));
        assert!(matches!(err, ServerError::Config(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
