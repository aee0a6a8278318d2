use std::path::PathBuf;

use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from the terminal or the working directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The directory walk failed; no partial tree is kept.
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// Terminal initialization or event-loop errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Invalid root path provided by the user.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
