//! Command line argument parsing for the bz utility

use std::ffi::OsString;

use clap::Parser;

/// Compress or extract a single file with bzip2
#[derive(Parser, Debug)]
#[command(
    name = "bz",
    version,
    about = "Compress or extract a single file with bzip2",
    long_about = "bz compresses (a) or extracts (e) one file with bzip2 in 1 MiB blocks, \
                 drawing a progress gauge. Ctrl+C stops the operation and removes the partial output.",
    override_usage = "bz a <input_file> <output_file>\n       bz e <input_file> <output_file>"
)]
pub struct BzOpts {
    /// Action (`a` to compress, `e` to extract), input file, output file
    ///
    /// Paths may begin with `-` and need not be valid UTF-8.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<OsString>,
}

impl BzOpts {
    /// Parse command line arguments without exiting on errors
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
