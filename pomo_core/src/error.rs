//! Error types for the pomo_core library.

use crate::SoundId;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for pomo_core operations
///
/// Engine commands never fail; these cover the configuration file,
/// command parsing and the sound collaborator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Sound name outside the built-in set
    #[error("Unknown sound: {0}")]
    UnknownSound(String),

    /// Sound is known but could not be played on this host
    #[error("Sound unavailable: {0}")]
    SoundUnavailable(SoundId),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
