//! Fixed-capacity block buffer shared by every iteration of one session.

use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};

/// A zero-initialised byte buffer whose capacity is fixed at allocation.
///
/// The storage is a boxed slice, so it can never grow or shrink after
/// [`BlockBuffer::new`] returns.
pub struct BlockBuffer {
    data: Box<[u8]>,
}

impl BlockBuffer {
    /// Allocates a buffer of exactly `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the memory cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailed { capacity })?;
        data.resize(capacity, 0);

        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Returns the buffer's capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl Deref for BlockBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for BlockBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
