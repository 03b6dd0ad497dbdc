//! Decompression session bound to a source reader.

use std::io::{ErrorKind, Read};

use bzip2::{Decompress, Status};

use super::{delta, staging_buffer, CodecError, Result};

/// Status reported alongside every successful [`Decoder::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    /// More decompressed data may follow.
    Ok,
    /// The end-of-stream marker was decoded; the returned bytes are the last ones.
    StreamEnd,
}

/// Safe wrapper around a `bzip2::Decompress` stream reading from `R`.
///
/// Only the first bzip2 stream of the source is decoded. Bytes following its
/// end-of-stream marker are left unread.
pub struct Decoder<R: Read> {
    stream: Decompress,
    /// Source of compressed bytes.
    reader: R,
    /// Compressed bytes read from `reader` but not yet consumed.
    staging: Vec<u8>,
    pos: usize,
    len: usize,
    /// The reader has reported end of file.
    eof: bool,
    /// The end-of-stream marker has been decoded.
    finished: bool,
}

impl<R: Read> Decoder<R> {
    /// Opens a decompression session on `reader`.
    ///
    /// # Parameters
    ///
    /// * `reader` - Source of the compressed stream.
    /// * `small` - Use libbzip2's slower, low-memory decoding algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfMemory`] if the staging buffer cannot be allocated.
    pub fn new(reader: R, small: bool) -> Result<Self> {
        let staging = staging_buffer()?;
        log::trace!("opening bzip2 decoder (small: {small})");

        Ok(Self {
            stream: Decompress::new(small),
            reader,
            staging,
            pos: 0,
            len: 0,
            eof: false,
            finished: false,
        })
    }

    /// Decompresses into `buf`, filling it unless the stream ends first.
    ///
    /// # Returns
    ///
    /// The number of bytes written into `buf`, and [`ReadStatus::StreamEnd`] once
    /// the end-of-stream marker has been reached. Later calls return `(0, StreamEnd)`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedEof`] if the source ends before the marker.
    /// Returns [`CodecError::Backend`] if the compressed data is corrupt.
    /// Returns [`CodecError::Io`] if reading the source fails.
    /// Returns [`CodecError::Stalled`] if libbzip2 stops making progress.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<(usize, ReadStatus)> {
        if self.finished {
            return Ok((0, ReadStatus::StreamEnd));
        }

        let mut filled = 0;
        while filled < buf.len() {
            if self.pos == self.len && !self.eof {
                self.refill()?;
            }

            let before_in = self.stream.total_in();
            let before_out = self.stream.total_out();

            let status = self
                .stream
                .decompress(&self.staging[self.pos..self.len], &mut buf[filled..])?;

            let used = delta(self.stream.total_in(), before_in);
            let written = delta(self.stream.total_out(), before_out);
            self.pos += used;
            filled += written;

            if status == Status::StreamEnd {
                self.finished = true;
                return Ok((filled, ReadStatus::StreamEnd));
            }

            if used == 0 && written == 0 {
                if !self.eof {
                    return Err(CodecError::Stalled);
                }
                // Hand out what was decoded; the next call reports the truncation.
                if filled > 0 {
                    break;
                }
                return Err(CodecError::UnexpectedEof);
            }
        }

        Ok((filled, ReadStatus::Ok))
    }

    fn refill(&mut self) -> Result<()> {
        loop {
            match self.reader.read(&mut self.staging) {
                Ok(0) => {
                    self.eof = true;
                    self.pos = 0;
                    self.len = 0;
                    return Ok(());
                }
                Ok(read) => {
                    self.pos = 0;
                    self.len = read;
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Total number of compressed bytes consumed.
    pub fn total_in(&self) -> u64 {
        self.stream.total_in()
    }

    /// Closes the session and hands the reader back.
    pub fn close(self) -> R {
        log::trace!(
            "closed bzip2 decoder: {} bytes in, {} bytes out",
            self.stream.total_in(),
            self.stream.total_out()
        );
        self.reader
    }
}
