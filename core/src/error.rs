//! Errors

use thiserror::Error;

/// Errors reported by the renderer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument violated the contract of the called operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value was outside its permitted range.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A render worker thread panicked.
    #[error("render worker panicked: {0}")]
    WorkerPanicked(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type used throughout the renderer.
pub type Result<T> = std::result::Result<T, Error>;
