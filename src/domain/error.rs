use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for scaffolding operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Reading an answer from the user failed or input ended early.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Target directory is already present.
    #[error("Directory {} already exists.", .0.display())]
    DirectoryExists(PathBuf),

    /// HTTP client could not be constructed; no request was made.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// Connection to the template host could not be completed.
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// Template host answered with a non-200 status.
    #[error("Request failed: {status}")]
    HttpStatus { url: String, status: u16 },

    /// Template archive is corrupt, truncated, or not tar-gzip.
    #[error("Failed to extract {}: {message}", archive.display())]
    Extraction { archive: PathBuf, message: String },

    /// Unexpected failure reading or writing a scaffolded file.
    #[error("Failed to access {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn prompt_error<S: Into<String>>(message: S) -> Self {
        AppError::Prompt(message.into())
    }

    pub(crate) fn file_system(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileSystem { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::FileSystem { source: err, .. } => err.kind(),
            AppError::Prompt(_) => io::ErrorKind::UnexpectedEof,
            AppError::DirectoryExists(_) => io::ErrorKind::AlreadyExists,
            AppError::HttpClient(_) | AppError::Network { .. } | AppError::HttpStatus { .. } => {
                io::ErrorKind::Other
            }
            AppError::Extraction { .. } => io::ErrorKind::InvalidData,
        }
    }
}
