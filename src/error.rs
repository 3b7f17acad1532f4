//! Error types for the risepack CLI.
//!
//! Aggregates the per-stage error enums behind one semantic type so the
//! binary can map every failure to a single user-facing message and exit
//! code.

use crate::cartridge::BuildError;
use crate::extract::DecodeError;
use crate::input::InputError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting or packaging a course.
#[derive(Debug, Error)]
pub enum RisepackError {
    /// The input file holds no recognisable wrapper call. Expected for
    /// unrelated input; reported as a message, never a panic.
    #[error("no embedded course payload found in {path}")]
    PayloadNotFound {
        /// The file that was scanned.
        path: Utf8PathBuf,
    },

    /// The embedded payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Pre-extracted lesson input could not be read.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Cartridge construction failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The course data yielded no lessons to package.
    #[error("no lessons found in course data")]
    NoLessons,

    /// Writing the output archive failed.
    #[error("failed to write output to {path}: {reason}")]
    OutputWrite {
        /// Destination the archive was being written to.
        path: Utf8PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`RisepackError`].
pub type Result<T> = std::result::Result<T, RisepackError>;
