use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use logger_redacted::redact;
use medical_ai_service::AiError;
use serde::Serialize;
use telephony_service::TelephonyError;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

/// Error body returned by every endpoint
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    /// Human-readable error message
    pub error: String,
    pub error_type: String,
    /// Unique error ID for tracking
    pub error_id: String,
    /// Raw model output, when that output could not be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("External service error: {message}")]
    External { message: String },

    #[error("Unusable model output: {message}")]
    ModelOutput { message: String, raw: String },

    #[error("Gone: {message}")]
    Gone { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::External {
            message: message.into(),
        }
    }

    pub fn gone(message: impl Into<String>) -> Self {
        Self::Gone {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::External { .. } | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ModelOutput { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Gone { .. } => StatusCode::GONE,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::External { .. } => "external_service_error",
            ApiError::ModelOutput { .. } => "model_output_error",
            ApiError::Gone { .. } => "gone",
            ApiError::Internal { .. } => "internal_error",
        }
    }

    /// Error text for the logs, with PII redacted
    pub fn log_text(&self) -> String {
        redact(&self.to_string())
    }

    /// Message shown to the client, without the category prefix
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation { message }
            | ApiError::BadRequest { message }
            | ApiError::External { message }
            | ApiError::ModelOutput { message, .. }
            | ApiError::Gone { message }
            | ApiError::Internal { message } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // Log the error with correlation ID
        error!(
            error_id = %error_id,
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %self.log_text(),
            "API error occurred"
        );

        let error_type = self.error_type().to_string();
        let (error, raw) = match self {
            ApiError::ModelOutput { message, raw } => (message, Some(raw)),
            other => (other.message().to_string(), None),
        };

        let body = ApiErrorResponse {
            success: false,
            error,
            error_type,
            error_id,
            raw,
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<TelephonyError> for ApiError {
    fn from(error: TelephonyError) -> Self {
        match error {
            TelephonyError::Api { message, .. } => ApiError::external(message),
            TelephonyError::InvalidInput(message) => ApiError::bad_request(message),
            other => ApiError::external(other.to_string()),
        }
    }
}

impl From<AiError> for ApiError {
    fn from(error: AiError) -> Self {
        match error {
            AiError::Image(message) => ApiError::bad_request(format!("Invalid image: {message}")),
            AiError::Provider { message, .. } => ApiError::external(message),
            other => ApiError::external(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        ApiError::bad_request(error.body_text())
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
