//! Configuration builders for bzip2 compression and decompression operations.

use std::num::NonZeroUsize;

use crate::BLOCK_SIZE;

/// Block size level used unless overridden: 900 KiB blocks, the best ratio.
pub const DEFAULT_LEVEL: u32 = 9;

/// Work factor used unless overridden, matching the `bzip2(1)` default.
pub const DEFAULT_WORK_FACTOR: u32 = 30;

const DEFAULT_BLOCK_SIZE: NonZeroUsize = match NonZeroUsize::new(BLOCK_SIZE) {
    Some(size) => size,
    None => panic!("block size must be non-zero"),
};

/// Configuration builder for compression operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOptions {
    level: u32,
    work_factor: u32,
    block_size: NonZeroUsize,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            work_factor: DEFAULT_WORK_FACTOR,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl CompressionOptions {
    /// Sets the bzip2 block size level (`1..=9`).
    ///
    /// Out-of-range values are accepted here and rejected when the codec
    /// session opens.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Sets the work factor controlling when libbzip2 falls back to its
    /// slower sorting algorithm on repetitive input (`0..=250`).
    #[must_use]
    pub fn with_work_factor(mut self, work_factor: u32) -> Self {
        self.work_factor = work_factor;
        self
    }

    /// Sets how many bytes are read from the input per block.
    #[must_use]
    pub fn with_block_size(mut self, block_size: NonZeroUsize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Block size level passed to the codec.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Work factor passed to the codec.
    pub fn work_factor(&self) -> u32 {
        self.work_factor
    }

    /// Number of bytes read per block.
    pub fn block_size(&self) -> NonZeroUsize {
        self.block_size
    }
}

/// Configuration builder for decompression operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompressionOptions {
    small: bool,
    block_size: NonZeroUsize,
}

impl Default for DecompressionOptions {
    fn default() -> Self {
        Self {
            small: false,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl DecompressionOptions {
    /// Selects libbzip2's low-memory decoding algorithm.
    ///
    /// It needs roughly half the memory at about half the speed.
    #[must_use]
    pub fn with_small(mut self, small: bool) -> Self {
        self.small = small;
        self
    }

    /// Sets how many decompressed bytes are produced per block.
    #[must_use]
    pub fn with_block_size(mut self, block_size: NonZeroUsize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Whether the low-memory algorithm is used.
    pub fn small(&self) -> bool {
        self.small
    }

    /// Number of decompressed bytes produced per block.
    pub fn block_size(&self) -> NonZeroUsize {
        self.block_size
    }
}
