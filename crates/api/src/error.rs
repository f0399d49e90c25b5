//! API error type and its HTTP mapping

use authgate_credential::PriorityError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors returned by management handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not valid JSON of the expected shape
    #[error("invalid body")]
    InvalidBody,

    /// `name` field missing or null
    #[error("name is required")]
    NameRequired,

    /// `name` blank after trimming
    #[error("name cannot be empty")]
    EmptyName,

    /// Registry collaborators are not configured
    #[error("handler not initialized: {0}")]
    Unavailable(String),

    /// No credential matches the name
    #[error("auth file not found")]
    NotFound,

    /// Configuration could not be saved
    #[error("failed to save config: {0}")]
    Persistence(String),

    /// Credential store failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody | Self::NameRequired | Self::EmptyName => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PriorityError> for ApiError {
    fn from(error: PriorityError) -> Self {
        match error {
            PriorityError::EmptyName => Self::EmptyName,
            PriorityError::Unavailable { component } => Self::Unavailable(component.to_string()),
            PriorityError::NotFound { .. } => Self::NotFound,
            PriorityError::Persistence { source } => Self::Persistence(source.to_string()),
            PriorityError::Store { source } => Self::Internal(source.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Management request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;
