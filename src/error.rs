use thiserror::Error;

use crate::openai::CompletionError;

#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Completion service error: {0}")]
    Completion(#[from] CompletionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
