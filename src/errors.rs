use aws_sdk_bedrockruntime::error::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Failed to invoke Bedrock model: {0}")]
    BedrockError(String),

    #[error("Failed to parse model response: {0}")]
    ModelResponseError(String),

    #[error("Failed to serialize request body: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for TriageError {
    fn from(error: serde_json::Error) -> Self {
        TriageError::SerializationError(error.to_string())
    }
}

impl From<anyhow::Error> for TriageError {
    fn from(error: anyhow::Error) -> Self {
        TriageError::BedrockError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E> From<SdkError<E>> for TriageError
where
    E: std::fmt::Display,
{
    fn from(error: SdkError<E>) -> Self {
        TriageError::BedrockError(error.to_string())
    }
}
