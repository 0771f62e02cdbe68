use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("Content blocked by safety filters: {0}")]
    ContentFiltered(String),

    #[error("Image processing error: {0}")]
    Image(String),

    /// Transport failure, with the request URL stripped
    #[error("Network error: {0}")]
    Network(reqwest::Error),
}

impl From<reqwest::Error> for AiError {
    fn from(error: reqwest::Error) -> Self {
        AiError::Network(error.without_url())
    }
}

impl From<image::ImageError> for AiError {
    fn from(error: image::ImageError) -> Self {
        AiError::Image(error.to_string())
    }
}

pub type AiResult<T> = Result<T, AiError>;
