//! Error types for the agent introduction.
//!
//! Library crates use [`IntroductionError`] via `thiserror`.
//! The binary wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all introduction operations.
#[derive(Debug, thiserror::Error)]
pub enum IntroductionError {
    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON encoding of the record failed.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A file read back from disk is not a valid introduction document.
    #[error("decode error at {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, IntroductionError>;

impl IntroductionError {
    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a `serde_json::Error` raised while decoding the file at `path`.
    pub fn decode(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }
}
