//! Error types used by the codec sessions.

use std::io;

use thiserror::Error;

/// Type alias for `Result<T, CodecError>`.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error values returned by [`Encoder`](super::Encoder) and [`Decoder`](super::Decoder).
#[derive(Debug, Error)]
pub enum CodecError {
    /// A session parameter lies outside the range libbzip2 accepts.
    #[error("invalid {name} {value}, expected {min}..={max}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// libbzip2 reported an error (corrupt data, bad magic, misuse).
    #[error("{0}")]
    Backend(#[from] bzip2::Error),

    /// The file bound to the session failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The compressed source ended before the end-of-stream marker.
    #[error("unexpected end of compressed data")]
    UnexpectedEof,

    /// The codec accepted no input and produced no output.
    #[error("no progress is possible")]
    Stalled,

    /// A staging buffer could not be allocated.
    #[error("memory allocation failed")]
    OutOfMemory,
}
