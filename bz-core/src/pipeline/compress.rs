//! File-to-file bzip2 compression.

use std::path::Path;

use crate::buffer::BlockBuffer;
use crate::codec::{Encoder, Finalize};
use crate::config::StreamSummary;
use crate::error::{Error, Result};
use crate::options::CompressionOptions;
use crate::progress::{Progress, ProgressObserver};
use crate::signal::CancelToken;

use super::{create_destination, open_source, read_block, remove_partial_output};

/// Compresses the file at `input_path` into a bzip2 file at `output_path`.
///
/// The input is read one block at a time and each block is fed to the
/// compression session. `observer` receives the percentage of input consumed
/// whenever it changes, and 100 once more when the operation completes.
/// `cancel` is polled before every block.
///
/// # Parameters
///
/// * `input_path` - File to compress
/// * `output_path` - Destination, created or truncated
/// * `options` - Codec settings and block size [`CompressionOptions`]
/// * `observer` - Receiver of progress updates
/// * `cancel` - Cancellation flag polled between blocks
///
/// # Returns
///
/// A [`StreamSummary`] with the uncompressed bytes read and compressed bytes written.
///
/// # Errors
///
/// - [`Error::CannotOpenInput`] / [`Error::CannotCreateOutput`] if a file cannot be opened
/// - [`Error::CodecInitFailed`] if the codec rejects the options
/// - [`Error::InputReadFailed`] if reading the input fails mid-stream
/// - [`Error::CodecWriteFailed`] if compressing or finalizing fails
/// - [`Error::Interrupted`] if cancelled; the output file is removed
///
/// Other failures leave the partial output on disk.
pub fn compress(
    input_path: &Path,
    output_path: &Path,
    options: &CompressionOptions,
    observer: &mut dyn ProgressObserver,
    cancel: CancelToken<'_>,
) -> Result<StreamSummary> {
    let mut block = BlockBuffer::new(options.block_size().get())?;

    let (mut input, total) = open_source(input_path)?;
    let output = create_destination(output_path)?;
    let mut encoder = Encoder::new(output, options.level(), options.work_factor())
        .map_err(Error::CodecInitFailed)?;

    log::debug!(
        "compressing '{}' ({total} bytes) into '{}'",
        input_path.display(),
        output_path.display()
    );

    let mut progress = Progress::new(total);
    let mut failure = None;

    while !cancel.is_cancelled() {
        let read = match read_block(&mut input, &mut block) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) => {
                failure = Some(Error::InputReadFailed(err));
                break;
            }
        };

        if let Err(err) = encoder.write(&block[..read]) {
            failure = Some(Error::CodecWriteFailed(err));
            break;
        }

        if let Some(percent) = progress.advance(read as u64) {
            observer.on_progress(percent);
        }
    }

    let cancelled = cancel.is_cancelled();
    let mode = if cancelled || failure.is_some() {
        Finalize::Discard
    } else {
        Finalize::Finish
    };

    // Session first, then the output file it wrote to, then the input.
    let finalized = encoder
        .close(mode)
        .map(|closed| closed.total_out)
        .map_err(Error::CodecWriteFailed);
    drop(input);

    if cancelled {
        log::warn!("compression of '{}' interrupted", input_path.display());
        remove_partial_output(output_path);
        return Err(Error::Interrupted);
    }

    observer.on_progress(100);

    if let Some(err) = failure {
        return Err(err);
    }
    let bytes_written = finalized?;

    log::debug!(
        "compressed {} bytes into {bytes_written} bytes",
        progress.processed()
    );
    Ok(StreamSummary::new(progress.processed(), bytes_written))
}
