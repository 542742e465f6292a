//! Error types for between-core

/// Result type for between-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source content is empty.")]
    EmptySource,

    /// The target lacks a BEGIN/END pair; both fields hold the rendered
    /// marker text that was expected.
    #[error("Target file content does not have necessary tokens {begin} and {end}.")]
    MissingTokens { begin: String, end: String },

    #[error("Invalid marker pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Unknown comment type: {0}")]
    UnknownCommentType(String),

    #[error(transparent)]
    Fs(#[from] between_fs::Error),

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
