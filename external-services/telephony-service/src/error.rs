use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelephonyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Platform returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(reqwest::Error),
}

impl From<reqwest::Error> for TelephonyError {
    fn from(error: reqwest::Error) -> Self {
        TelephonyError::Network(error.without_url())
    }
}

impl TelephonyError {
    /// HTTP status reported by the platform, if the request got that far
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            TelephonyError::Api { status, .. } => Some(*status),
            TelephonyError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type TelephonyResult<T> = Result<T, TelephonyError>;
