//! Error types for palaver.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalaverError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Audio decoding errors
    #[error("Malformed PCM data: {byte_len} bytes is not a whole number of 16-bit samples")]
    MalformedPcm { byte_len: usize },

    // Speech model errors (raised by backends, swallowed by the session)
    #[error("Speech model error: {message}")]
    SpeechModel { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, PalaverError>;
