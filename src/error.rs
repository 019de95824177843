//! Error types for the organizer binary and its collaborators.
//!
//! Bounds violations on organizer operations are not errors here: they are
//! reported through [`crate::organizer::IndexError`] and printed, never
//! propagated out of the console layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizerError {
    /// Config file or environment could not be read/deserialized
    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Config loaded but failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Audio file could not be decoded
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    /// No usable audio output device
    #[error("audio output unavailable: {0}")]
    OutputStream(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("command `{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("not a track index: {0}")]
    InvalidIndex(String),
}

pub type Result<T> = std::result::Result<T, OrganizerError>;
