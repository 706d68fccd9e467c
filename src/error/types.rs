//! Error type definitions
//!
//! Local failures (bad arguments, unsupported shapes) are kept apart from
//! failures reported by the remote API and failures of the transport itself.

use thiserror::Error;

/// Main error type for the JW Platform client
#[derive(Error, Debug)]
pub enum Error {
    /// A required key, file or field set was missing; raised before any request
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The API answered with a structured error or without the expected entity
    #[error("Remote rejection for {key}: {message}")]
    RemoteRejection { key: String, message: String },

    /// Thumbnail never reached the `ready` state within the poll budget
    #[error("Thumbnail for {key} not ready after {attempts} attempts")]
    NotReady { key: String, attempts: u32 },

    /// Non-2xx status or otherwise unusable response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Case transform or parse invoked on an unsupported input shape
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP client errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a remote rejection carrying the offending key
    pub fn remote_rejection(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RemoteRejection {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a not-ready error for thumbnail polling
    pub fn not_ready(key: impl Into<String>, attempts: u32) -> Self {
        Self::NotReady {
            key: key.into(),
            attempts,
        }
    }

    /// Create a new transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new encoding error
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the failure happened on the wire rather than locally or remotely
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Network(_) | Self::Json(_))
    }
}
