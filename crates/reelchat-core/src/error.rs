use thiserror::Error;

/// Top-level error type for the Reelchat system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates convert
/// their own errors into `ReelchatError` so that the `?` operator works
/// seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReelchatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Memory error: {0}")]
    Memory(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Vision error: {0}")]
    Vision(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ReelchatError {
    fn from(err: toml::de::Error) -> Self {
        ReelchatError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ReelchatError {
    fn from(err: toml::ser::Error) -> Self {
        ReelchatError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ReelchatError {
    fn from(err: serde_json::Error) -> Self {
        ReelchatError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Reelchat operations.
pub type Result<T> = std::result::Result<T, ReelchatError>;
