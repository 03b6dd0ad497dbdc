//! Safe, resource-owning bzip2 codec sessions.
//!
//! [`Encoder`] binds a `bzip2::Compress` stream to a destination writer and
//! [`Decoder`] binds a `bzip2::Decompress` stream to a source reader, in the
//! same way `BZ2_bzWriteOpen`/`BZ2_bzReadOpen` bind a session to a `FILE*`.
//! Both release the underlying libbzip2 state when dropped.

mod decoder;
mod encoder;
mod error;

pub use decoder::{Decoder, ReadStatus};
pub use encoder::{Closed, Encoder, Finalize};
pub use error::{CodecError, Result};

/// Smallest accepted block size level (100 KiB blocks).
pub const MIN_LEVEL: u32 = 1;

/// Largest accepted block size level (900 KiB blocks, best ratio).
pub const MAX_LEVEL: u32 = 9;

/// Largest work factor libbzip2 accepts. Zero selects the library default.
pub const MAX_WORK_FACTOR: u32 = 250;

/// Size of the staging buffer each session uses between the codec and its file.
const STAGING_SIZE: usize = 64 * 1024;

/// Allocates a zeroed staging buffer, reporting failure instead of aborting.
fn staging_buffer() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(STAGING_SIZE)
        .map_err(|_| CodecError::OutOfMemory)?;
    buf.resize(STAGING_SIZE, 0);
    Ok(buf)
}

/// Converts a libbzip2 byte-count delta into a slice length.
fn delta(after: u64, before: u64) -> usize {
    usize::try_from(after - before).unwrap_or(usize::MAX)
}
