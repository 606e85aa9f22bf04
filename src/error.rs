//! Crate-wide error type.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a conversion or load can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened.
    #[error("kernel file not found at {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file could not be created or truncated.
    #[error("output file could not be created at {}: {source}", .path.display())]
    FileNotCreatable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line reached the configured maximum length.
    #[error("line {line} exceeds the maximum line length of {max} bytes")]
    LineTooLong { line: usize, max: usize },

    /// The final line had no newline while strict termination was requested.
    #[error("line {line} is missing its terminating newline")]
    MissingTrailingNewline { line: usize },

    /// A buffer could not be reserved.
    #[error("failed to allocate {requested} bytes: {source}")]
    Allocation {
        requested: usize,
        source: TryReserveError,
    },

    /// Loaded source was requested as a `String` but is not UTF-8.
    #[error("kernel source is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a `FileNotFound` error for `path`.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    /// Create a `FileNotCreatable` error for `path`.
    #[must_use]
    pub fn not_creatable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotCreatable {
            path: path.into(),
            source,
        }
    }
}

/// Reserve `additional` bytes in `buf`, mapping failure to [`Error::Allocation`].
///
/// # Errors
///
/// Returns [`Error::Allocation`] when the allocator refuses the request.
pub fn try_reserve(buf: &mut Vec<u8>, additional: usize) -> Result<()> {
    buf.try_reserve(additional).map_err(|source| Error::Allocation {
        requested: additional,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_too_long_message() {
        let err = Error::LineTooLong { line: 7, max: 128 };
        assert_eq!(
            err.to_string(),
            "line 7 exceeds the maximum line length of 128 bytes"
        );
    }

    #[test]
    fn test_not_found_message_includes_path() {
        let err = Error::not_found(
            "../data/kernel.cl",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("../data/kernel.cl"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_try_reserve_impossible_request() {
        let mut buf = Vec::new();
        let err = try_reserve(&mut buf, usize::MAX);
        assert!(matches!(
            err,
            Err(Error::Allocation {
                requested: usize::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
