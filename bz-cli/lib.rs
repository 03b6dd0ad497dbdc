//! Shared functionality for the `bz` command-line tool.
//!
//! The binary takes an action selector and two paths, runs one compress or
//! extract operation through `bz_core` and prints a single status line. This
//! crate holds everything apart from process setup, so it can be tested
//! without spawning the binary.

use std::ffi::OsStr;
use std::path::Path;
use std::str::FromStr;

use bz_core::{
    pipeline::{compress, uncompress},
    progress::ProgressObserver,
    signal::CancelToken,
    Direction, StreamSummary,
};

pub mod config;
pub mod error;

pub use config::CliConfig;
pub use error::{Error, Result};


/// Exit status after a completed run, whether the operation succeeded or not.
pub const EXIT_OK: i32 = 0;

/// Exit status for usage errors and unknown actions.
pub const EXIT_USAGE: i32 = 255;

/// The operation selected by the first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `a`: compress the input into a `.bz2` file
    Compress,
    /// `e`: extract a `.bz2` file
    Extract,
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a" => Ok(Action::Compress),
            "e" => Ok(Action::Extract),
            other => Err(Error::UnknownAction {
                action: other.to_string(),
            }),
        }
    }
}

impl Action {
    /// Direction of the underlying pipeline.
    pub fn direction(self) -> Direction {
        match self {
            Action::Compress => Direction::Compress,
            Action::Extract => Direction::Decompress,
        }
    }

    /// Status line printed to stdout on success.
    pub fn done_message(self) -> &'static str {
        match self {
            Action::Compress => "Done: compressed",
            Action::Extract => "Done: uncompressed",
        }
    }

    /// Final line printed to stderr on failure.
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::Compress => "Error: compression failed",
            Action::Extract => "Error: uncompression failed",
        }
    }
}

/// Usage text listing both actions.
pub fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {program} a <input_file> <output_file> (compress)\n  {program} e <input_file> <output_file> (extract)\n"
    )
}

/// Builds a configuration from the positional arguments.
///
/// # Errors
///
/// Returns [`Error::Usage`] unless exactly three arguments are given, and
/// [`Error::UnknownAction`] if the first one is not `a` or `e`. The paths are
/// taken as given, including a leading `-` or bytes that are not UTF-8.
pub fn parse_invocation<S: AsRef<OsStr>>(args: &[S]) -> Result<CliConfig> {
    let [action, input, output] = args else {
        return Err(Error::Usage);
    };
    let action = action.as_ref();
    let action = match action.to_str() {
        Some(action) => action.parse::<Action>()?,
        None => {
            return Err(Error::UnknownAction {
                action: action.to_string_lossy().into_owned(),
            })
        }
    };
    Ok(CliConfig::new(
        action,
        Path::new(input.as_ref()),
        Path::new(output.as_ref()),
    ))
}

/// Runs the configured operation.
///
/// # Errors
///
/// Returns the pipeline error unchanged; see [`bz_core::Error`].
pub fn run(
    config: &CliConfig,
    observer: &mut dyn ProgressObserver,
    cancel: CancelToken<'_>,
) -> bz_core::Result<StreamSummary> {
    log::debug!(
        "{:?}: '{}' -> '{}'",
        config.action.direction(),
        config.input.display(),
        config.output.display()
    );

    match config.action {
        Action::Compress => compress(
            &config.input,
            &config.output,
            &config.compression,
            observer,
            cancel,
        ),
        Action::Extract => uncompress(
            &config.input,
            &config.output,
            &config.decompression,
            observer,
            cancel,
        ),
    }
}

/// Formats the stderr lines for a failed operation.
pub fn format_failure(action: Action, err: &bz_core::Error) -> String {
    format!("Error: {err}\n{}", action.failure_message())
}
