//! Shared configuration primitives and types for bzip2 stream processing.

/// Direction of a transform session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plain input, bzip2 output.
    Compress,
    /// bzip2 input, plain output.
    Decompress,
}

/// Statistical summary of completed stream processing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Total number of bytes read from the input source.
    pub bytes_read: u64,

    /// Total number of bytes written to the output destination.
    pub bytes_written: u64,
}

impl StreamSummary {
    /// Creates a new stream summary with the specified byte counts.
    pub(crate) const fn new(bytes_read: u64, bytes_written: u64) -> Self {
        Self {
            bytes_read,
            bytes_written,
        }
    }

    /// Calculates the compression ratio for this stream summary.
    ///
    /// # Returns
    ///
    /// The compression ratio as an `f64`. A value less than 1.0 indicates
    /// compression occurred, while a value greater than 1.0 indicates expansion.
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_read == 0 {
            if self.bytes_written == 0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            self.bytes_written as f64 / self.bytes_read as f64
        }
    }

    /// Calculates the space saved percentage for compression operations.
    ///
    /// Negative values mean the output was larger than the input.
    pub fn space_saved_percent(&self) -> f64 {
        if self.bytes_read == 0 {
            0.0
        } else {
            (1.0 - self.compression_ratio()) * 100.0
        }
    }
}
