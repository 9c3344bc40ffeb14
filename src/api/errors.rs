use crate::auth::ValidationError;
use thiserror::Error;

/// Status shown whenever a failure has no more specific user-facing text.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Collapses the error into the single status line a form displays.
    ///
    /// Validation and HTTP errors already carry user-facing text; everything
    /// else is reported with [`GENERIC_FAILURE`] so transport details stay in
    /// the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::Http { message, .. } => message.clone(),
            AppError::Config(_)
            | AppError::Network(_)
            | AppError::Timeout(_)
            | AppError::Parse(_)
            | AppError::Serialization(_) => GENERIC_FAILURE.to_string(),
        }
    }
}
