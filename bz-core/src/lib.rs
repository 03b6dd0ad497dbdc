//! # bz-core
//!
//! Block-streaming compression and decompression pipeline for bzip2 files.
//!
//! The crate reads its source in fixed-size blocks, feeds every block to a
//! stateful bzip2 codec session and writes the transformed bytes out while
//! tracking progress against the size of the source file. An operation can be
//! cancelled between blocks; a cancelled operation removes its partial output.
//!
//! # Example
//!
//! ```no_run
//! use bz_core::options::{CompressionOptions, DecompressionOptions};
//! use bz_core::pipeline::{compress, uncompress};
//! use bz_core::progress::NoProgress;
//! use bz_core::signal::CancelToken;
//!
//! let cancel = CancelToken::global();
//! compress(
//!     "notes.txt".as_ref(),
//!     "notes.txt.bz2".as_ref(),
//!     &CompressionOptions::default(),
//!     &mut NoProgress,
//!     cancel,
//! )?;
//! uncompress(
//!     "notes.txt.bz2".as_ref(),
//!     "notes.copy.txt".as_ref(),
//!     &DecompressionOptions::default(),
//!     &mut NoProgress,
//!     cancel,
//! )?;
//! # Ok::<(), bz_core::Error>(())
//! ```

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod progress;
pub mod signal;

pub use config::{Direction, StreamSummary};
pub use error::{Error, Result};

/// Size of one block: the unit of I/O and of progress granularity.
pub const BLOCK_SIZE: usize = 1024 * 1024;
