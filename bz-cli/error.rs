//! Error types for bz command-line invocations.

use thiserror::Error;

/// Result alias using the CLI [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Invocation errors detected before any file is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Wrong number of positional arguments.
    #[error("expected exactly three arguments: <a|e> <input> <output>")]
    Usage,

    /// The action selector is neither `a` nor `e`.
    #[error("unknown action: {action} ('a' or 'e')")]
    UnknownAction {
        /// The selector as given on the command line
        action: String,
    },
}
