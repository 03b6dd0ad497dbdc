//! Invocation settings assembled from the command line.

use std::path::PathBuf;

use bz_core::options::{CompressionOptions, DecompressionOptions};

use crate::Action;

/// Configuration for one CLI run: a single file, a single direction.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// What to do with the input
    pub action: Action,
    /// File to read
    pub input: PathBuf,
    /// File to create or truncate
    pub output: PathBuf,
    /// Codec settings used for `a`
    pub compression: CompressionOptions,
    /// Codec settings used for `e`
    pub decompression: DecompressionOptions,
}

impl CliConfig {
    /// A configuration with default codec settings.
    pub fn new(action: Action, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            action,
            input: input.into(),
            output: output.into(),
            compression: CompressionOptions::default(),
            decompression: DecompressionOptions::default(),
        }
    }
}
