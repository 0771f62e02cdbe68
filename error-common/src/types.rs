use thiserror::Error;

/// Process-level error enum
#[derive(Error, Debug)]
pub enum CareBridgeError {
    /// Network communication errors (binding, accepting)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// HTTP server runtime errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// External service initialisation errors
    #[error("External service error: {0}")]
    ExternalError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CareBridgeError {
    /// Short machine-readable category, used as a structured log field
    pub fn error_type(&self) -> &'static str {
        match self {
            CareBridgeError::NetworkError(_) => "network_error",
            CareBridgeError::ServerError(_) => "server_error",
            CareBridgeError::ConfigError(_) => "configuration_error",
            CareBridgeError::ExternalError(_) => "external_error",
            CareBridgeError::InternalError(_) => "internal_error",
            CareBridgeError::Other(_) => "other",
        }
    }
}

/// Result type alias for CareBridge operations
pub type Result<T> = std::result::Result<T, CareBridgeError>;

/// Async logging function for errors
pub async fn log_error(context: &str, error: &CareBridgeError) {
    tracing::error!(
        context = context,
        error_type = error.error_type(),
        error = %error,
        "CareBridge error occurred"
    );
}
