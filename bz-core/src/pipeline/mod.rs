//! Pipeline module for bzip2 compression and decompression of files.
//!
//! Both directions share one shape: open the source, size it, create the
//! destination, open the codec session, then move one block per iteration
//! until the data is exhausted, an error occurs or cancellation is requested.
//! The session and both files are closed on every exit path; a cancelled
//! operation additionally removes its partial output.

mod compress;
mod uncompress;

pub use compress::compress;
pub use uncompress::uncompress;

use std::fs::{self, File};
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Opens the source file and reads its size from filesystem metadata.
fn open_source(path: &Path) -> Result<(File, u64)> {
    let cannot_open = |source| Error::CannotOpenInput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(cannot_open)?;
    let total = file.metadata().map_err(cannot_open)?.len();
    Ok((file, total))
}

/// Creates or truncates the destination file.
fn create_destination(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::CannotCreateOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads until `block` is full or the reader is exhausted.
///
/// A short count therefore means end of input, and a zero count means there
/// was nothing left at all.
fn read_block<R: Read>(reader: &mut R, block: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

/// Removes the partial output of a cancelled operation.
fn remove_partial_output(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::debug!("removed partial output '{}'", path.display()),
        Err(err) => log::warn!(
            "cannot remove partial output '{}': {err}",
            path.display()
        ),
    }
}
