use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// A read against the store failed. `error` is the payload placed in the
    /// response body verbatim; its shape is chosen by the route.
    #[error("Query failure: {message}")]
    QueryFailure {
        message: String,
        error: serde_json::Value,
    },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
        }
    }

    pub fn query_failure(message: impl Into<String>, error: impl Into<serde_json::Value>) -> Self {
        AppError::QueryFailure {
            message: message.into(),
            error: error.into(),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            message: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<serde_json::Value>,
        }

        let (status, message, error) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
            AppError::QueryFailure { message, error } => {
                tracing::error!(error = %error, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message, Some(error))
            }
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(serde_json::Value::String(err.to_string())),
                )
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                    Some(serde_json::Value::String(err.to_string())),
                )
            }
        };

        (status, Json(ErrorResponse { message, error })).into_response()
    }
}
