//! Error types for restyle

use thiserror::Error;

/// Result type alias for restyle operations
pub type Result<T> = std::result::Result<T, RestyleError>;

/// Errors raised by the ambient surfaces (configuration, files, buffer edits).
///
/// The classifier itself never fails.
#[derive(Error, Debug)]
pub enum RestyleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Position {pos} is outside the buffer (length {len})")]
    OutOfRange { pos: usize, len: usize },

    #[error("{0}")]
    Message(String),
}
