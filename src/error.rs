use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtelierError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("Gemini service error ({status}): {message}")]
    ServiceError { status: u16, message: String },
}

/// Failure of a single image generation call.
pub type GenerationError = AtelierError;

pub type Result<T> = std::result::Result<T, AtelierError>;
