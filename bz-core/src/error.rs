//! Error types and result handling for bzip2 compression and decompression operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use crate::codec::CodecError;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a compress or uncompress operation can fail.
///
/// Each failure unwinds the current operation to its cleanup and is reported
/// once to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file does not exist, is unreadable, or its size is unknown.
    #[error("Cannot open input file '{}': {source}", path.display())]
    CannotOpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The destination file could not be created or truncated.
    #[error("Cannot create output file '{}': {source}", path.display())]
    CannotCreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The codec refused to open a session.
    #[error("Codec initialization failed: {0}")]
    CodecInitFailed(#[source] CodecError),

    /// The compression session rejected a block or could not be finalized.
    #[error("Compression failed: {0}")]
    CodecWriteFailed(#[source] CodecError),

    /// The decompression session rejected the compressed data.
    #[error("Decompression failed: {0}")]
    CodecReadFailed(#[source] CodecError),

    /// Reading the uncompressed source failed mid-stream.
    #[error("Cannot read input file: {0}")]
    InputReadFailed(#[source] io::Error),

    /// Decompressed bytes could not be fully written to the destination.
    #[error("Error writing to output file: {0}")]
    OutputWriteFailed(#[source] io::Error),

    /// The operation was cancelled by the interrupt signal.
    #[error("Interrupted by user")]
    Interrupted,

    /// The compressed source ended before the end-of-stream marker.
    #[error("Compressed data ended before the end-of-stream marker")]
    PrematureStreamEnd,

    /// The block buffer could not be allocated.
    #[error("unable to allocate block buffer of {capacity} bytes")]
    AllocationFailed {
        /// Size in bytes of the buffer that failed to allocate
        capacity: usize,
    },
}

impl Error {
    /// Whether this error is the result of a user interrupt.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::Interrupted)
    }
}
