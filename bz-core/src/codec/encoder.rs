//! Compression session bound to a destination writer.

use std::io::Write;

use bzip2::{Action, Compress, Compression, Status};

use super::{delta, staging_buffer, CodecError, Result, MAX_LEVEL, MAX_WORK_FACTOR, MIN_LEVEL};

/// How a compression session is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finalize {
    /// Flush the last block and write the end-of-stream trailer.
    Finish,
    /// Drop the session without writing a trailer.
    Discard,
}

/// What remains after an [`Encoder`] has been closed.
#[derive(Debug)]
pub struct Closed<W> {
    /// The destination writer, handed back to the caller.
    pub writer: W,
    /// Uncompressed bytes consumed by the session.
    pub total_in: u64,
    /// Compressed bytes written to the destination.
    pub total_out: u64,
}

/// Safe wrapper around a `bzip2::Compress` stream writing into `W`.
///
/// Dropping an encoder without [`close`](Encoder::close) discards the stream.
pub struct Encoder<W: Write> {
    stream: Compress,
    /// Destination receiving compressed bytes.
    writer: W,
    /// Staging area between libbzip2 and the writer.
    staging: Vec<u8>,
}

impl<W: Write> Encoder<W> {
    /// Opens a compression session on `writer`.
    ///
    /// # Parameters
    ///
    /// * `writer` - Destination for the compressed stream.
    /// * `level` - Block size level, `1..=9` (multiples of 100 KiB).
    /// * `work_factor` - Fallback sorting threshold, `0..=250`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidParameter`] if `level` or `work_factor` is out of range.
    /// Returns [`CodecError::OutOfMemory`] if the staging buffer cannot be allocated.
    pub fn new(writer: W, level: u32, work_factor: u32) -> Result<Self> {
        check_range("block size level", level, MIN_LEVEL, MAX_LEVEL)?;
        check_range("work factor", work_factor, 0, MAX_WORK_FACTOR)?;

        let staging = staging_buffer()?;
        log::trace!("opening bzip2 encoder: level {level}, work factor {work_factor}");

        Ok(Self {
            stream: Compress::new(Compression::new(level), work_factor),
            writer,
            staging,
        })
    }

    /// Compresses `input`, forwarding every produced byte to the writer.
    ///
    /// libbzip2 buffers input until a whole block is collected, so a call may
    /// write nothing at all.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Backend`] if libbzip2 rejects the call.
    /// Returns [`CodecError::Io`] if the writer fails.
    /// Returns [`CodecError::Stalled`] if libbzip2 stops making progress.
    pub fn write(&mut self, mut input: &[u8]) -> Result<()> {
        let stream = &mut self.stream;

        while !input.is_empty() {
            let before_in = stream.total_in();
            let before_out = stream.total_out();

            stream.compress(input, &mut self.staging, Action::Run)?;

            let used = delta(stream.total_in(), before_in);
            let written = delta(stream.total_out(), before_out);
            if written > 0 {
                self.writer.write_all(&self.staging[..written])?;
            }
            input = &input[used..];

            if used == 0 && written == 0 {
                return Err(CodecError::Stalled);
            }
        }

        Ok(())
    }

    /// Closes the session and hands the writer back.
    ///
    /// With [`Finalize::Finish`] the pending block and the stream trailer are
    /// written and the writer is flushed. With [`Finalize::Discard`] the
    /// libbzip2 state is released and nothing more is written.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Backend`], [`CodecError::Io`] or [`CodecError::Stalled`]
    /// if finishing the stream fails.
    pub fn close(self, mode: Finalize) -> Result<Closed<W>> {
        let Self {
            mut stream,
            mut writer,
            mut staging,
        } = self;

        if mode == Finalize::Finish {
            loop {
                let before_out = stream.total_out();
                let status = stream.compress(&[], &mut staging, Action::Finish)?;
                let written = delta(stream.total_out(), before_out);
                if written > 0 {
                    writer.write_all(&staging[..written])?;
                }

                if status == Status::StreamEnd {
                    break;
                }
                if written == 0 {
                    return Err(CodecError::Stalled);
                }
            }
            writer.flush()?;
        }

        log::trace!(
            "closed bzip2 encoder ({mode:?}): {} bytes in, {} bytes out",
            stream.total_in(),
            stream.total_out()
        );

        Ok(Closed {
            total_in: stream.total_in(),
            total_out: stream.total_out(),
            writer,
        })
    }
}

fn check_range(name: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CodecError::InvalidParameter {
            name,
            value,
            min,
            max,
        })
    }
}
