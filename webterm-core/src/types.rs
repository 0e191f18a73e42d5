//! Error types shared across the terminal library
//!
//! Filesystem errors carry the exact text shown to the user, so their
//! `Display` output doubles as command output.

/// Result type for terminal operations
pub type Result<T> = std::result::Result<T, TermError>;

/// Errors raised by the virtual filesystem
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FsError {
    #[error("no such directory: {0}")]
    NoSuchDirectory(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("forbidden access: {0}")]
    Forbidden(String),

    #[error("broken link")]
    BrokenLink,

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur outside of command execution
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("Filesystem error: {0}")]
    Fs(#[from] FsError),

    #[error("Invalid observer threshold: {0} (expected a value in 0.0..=1.0)")]
    InvalidThreshold(f64),

    #[error("Settings storage error: {0}")]
    Storage(String),

    #[error("Settings serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
