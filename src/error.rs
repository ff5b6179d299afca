use std::io;

use thiserror::Error;

/// The error type for linewise operations.
///
/// Any failure aborts the whole run; there is no retry or partial-result
/// recovery. Corpus lines that match no recognized pattern are not errors,
/// they simply contribute no data.
#[derive(Error, Debug)]
pub enum LinewiseError {
    /// I/O errors (unreadable corpus files, unwritable output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Training data that cannot be turned into a usable decision list
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Model dump failures (the output file must not already exist)
    #[error("Model error: {0}")]
    Model(String),

    /// Answer or key files that yield no scorable senses
    #[error("Score error: {0}")]
    Score(String),
}

/// Result type alias for operations that may fail with [`LinewiseError`].
pub type Result<T> = std::result::Result<T, LinewiseError>;

impl LinewiseError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        LinewiseError::Corpus(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        LinewiseError::Model(msg.into())
    }

    /// Create a new score error.
    pub fn score<S: Into<String>>(msg: S) -> Self {
        LinewiseError::Score(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LinewiseError::corpus("no usable training sentences");
        assert_eq!(error.to_string(), "Corpus error: no usable training sentences");

        let error = LinewiseError::score("no senses found");
        assert_eq!(error.to_string(), "Score error: no senses found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = LinewiseError::from(io_error);

        match error {
            LinewiseError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
