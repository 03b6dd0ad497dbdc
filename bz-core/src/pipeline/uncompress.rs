//! File-to-file bzip2 decompression.

use std::io::Write;
use std::path::Path;

use crate::buffer::BlockBuffer;
use crate::codec::{CodecError, Decoder, ReadStatus};
use crate::config::StreamSummary;
use crate::error::{Error, Result};
use crate::options::DecompressionOptions;
use crate::progress::{Progress, ProgressObserver};
use crate::signal::CancelToken;

use super::{create_destination, open_source, remove_partial_output};

/// Decompresses the bzip2 file at `input_path` into `output_path`.
///
/// Progress is measured as decompressed bytes against the size of the
/// compressed input, so it is an approximation and is clamped to 100.
///
/// # Errors
///
/// - [`Error::CannotOpenInput`] / [`Error::CannotCreateOutput`] if a file cannot be opened
/// - [`Error::CodecInitFailed`] if the decompression session cannot be opened
/// - [`Error::CodecReadFailed`] if the data is corrupt or the input cannot be read
/// - [`Error::PrematureStreamEnd`] if the input ends before the end-of-stream marker
/// - [`Error::OutputWriteFailed`] if writing the output fails
/// - [`Error::Interrupted`] if cancelled; the output file is removed
pub fn uncompress(
    input_path: &Path,
    output_path: &Path,
    options: &DecompressionOptions,
    observer: &mut dyn ProgressObserver,
    cancel: CancelToken<'_>,
) -> Result<StreamSummary> {
    let mut block = BlockBuffer::new(options.block_size().get())?;

    let (input, total) = open_source(input_path)?;
    let mut output = create_destination(output_path)?;
    let mut decoder = Decoder::new(input, options.small()).map_err(Error::CodecInitFailed)?;

    log::debug!(
        "uncompressing '{}' ({total} bytes) into '{}'",
        input_path.display(),
        output_path.display()
    );

    let mut progress = Progress::new(total);
    let mut stream_ended = false;
    let mut failure = None;

    while !stream_ended && !cancel.is_cancelled() {
        let (written, status) = match decoder.read(&mut block) {
            Ok(read) => read,
            Err(CodecError::UnexpectedEof) => {
                failure = Some(Error::PrematureStreamEnd);
                break;
            }
            Err(err) => {
                failure = Some(Error::CodecReadFailed(err));
                break;
            }
        };
        stream_ended = status == ReadStatus::StreamEnd;

        if written == 0 {
            continue;
        }

        if let Err(err) = output.write_all(&block[..written]) {
            failure = Some(Error::OutputWriteFailed(err));
            break;
        }

        if let Some(percent) = progress.advance(written as u64) {
            observer.on_progress(percent);
        }
    }

    let bytes_read = decoder.total_in();
    drop(decoder.close());
    drop(output);

    if cancel.is_cancelled() {
        log::warn!("decompression of '{}' interrupted", input_path.display());
        remove_partial_output(output_path);
        return Err(Error::Interrupted);
    }

    observer.on_progress(100);

    if let Some(err) = failure {
        return Err(err);
    }
    if !stream_ended {
        return Err(Error::PrematureStreamEnd);
    }

    log::debug!(
        "uncompressed {bytes_read} bytes into {} bytes",
        progress.processed()
    );
    Ok(StreamSummary::new(bytes_read, progress.processed()))
}
