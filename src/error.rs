// src/error.rs
//! Export error types with structured error handling.
//!
//! Every failure the engine can produce surfaces as one `ExportError`
//! variant. Underlying format-library and filesystem failures are wrapped
//! with their cause chained, never re-raised raw, so callers always see a
//! uniform type with a human-readable message and a machine-checkable kind.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::format::{Format, Shape};

/// Machine-checkable classification of an export failure.
///
/// The taxonomy is deliberately small: a caller can branch on the kind
/// without matching every variant, the way retry/report decisions are
/// actually made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The value's structure does not satisfy the format's precondition.
    Shape,
    /// The resolved format token matches no registry entry.
    UnsupportedFormat,
    /// Filesystem or format-library failure while producing the artifact.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Shape => write!(f, "shape"),
            ErrorKind::UnsupportedFormat => write!(f, "unsupported_format"),
            ErrorKind::Io => write!(f, "io"),
        }
    }
}

/// Main export error type.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The supplied value does not have the shape the format requires,
    /// e.g. a bare scalar handed to a tabular codec.
    #[error("{} export requires {required}", format.display_name())]
    Shape {
        /// Format whose precondition was violated.
        format: Format,
        /// The shape that format requires.
        required: Shape,
    },

    /// The resolved format token is not in the registry.
    #[error("Unsupported export format: {token}")]
    UnsupportedFormat { token: String },

    /// A filesystem operation failed: directory creation, file write,
    /// or path resolution.
    #[error("Filesystem error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An underlying format library failed while encoding the artifact.
    /// Classified as [`ErrorKind::Io`]; the original failure stays
    /// attached as the error source for diagnostics.
    #[error("Failed to export data to {}: {source}", format.display_name())]
    Codec {
        format: Format,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ExportError {
    /// The machine-checkable kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::Shape { .. } => ErrorKind::Shape,
            ExportError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            ExportError::Io { .. } | ExportError::Codec { .. } => ErrorKind::Io,
        }
    }

    /// Shape-precondition violation for `format`, naming the required shape.
    pub(crate) fn shape_violation(format: Format) -> Self {
        ExportError::Shape {
            format,
            required: format.shape(),
        }
    }

    /// Wraps a format-library failure, preserving the cause.
    pub(crate) fn codec_failure(
        format: Format,
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ExportError::Codec {
            format,
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }

    /// Wraps a filesystem failure at `path`.
    pub(crate) fn io_failure(path: &Path, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for export operations.
pub type Result<T, E = ExportError> = std::result::Result<T, E>;
