//! Shared error types for the application

use thiserror::Error;

/// Main error type for profilemap operations
#[derive(Debug, Error)]
pub enum ProfilemapError {
    /// Empty or malformed profile identifiers, rejected before orchestration
    #[error("Invalid profile URL: {0}")]
    InvalidInput(String),

    /// Data-source transport failures; recovered locally by falling back to
    /// the simulation path, never surfaced to callers
    #[error("Profile data fetch failed: {0}")]
    Fetch(String),

    /// Unexpected failures inside the scoring pipeline; caught at the
    /// orchestrator boundary and downgraded to a neutral-score report
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ProfilemapError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ProfilemapError>;
