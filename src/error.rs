//! Error types for Muyassar

use thiserror::Error;

/// Result type alias for Muyassar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Muyassar
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Text generation error (remote failure or empty response)
    #[error("generation error: {0}")]
    Generation(String),

    /// Speech synthesis error (remote failure or missing payload)
    #[error("TTS error: {0}")]
    Tts(String),

    /// Audio device or playback error
    #[error("audio error: {0}")]
    Audio(String),

    /// Audio payload decode error
    #[error("decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
