// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buf::GrowableBuffer,
    error::Error,
    growth::{alloc_store, MAX_CAPACITY},
};

impl GrowableBuffer {
    /// Appends `src` at the logical end, growing the store if needed, and
    /// returns `self` so calls can be chained.
    ///
    /// When `len + src.len()` exceeds the capacity, the store is replaced by one
    /// of `max(capacity * growth_factor, len + src.len() + 1)` bytes and the
    /// logical prefix is copied over. On error nothing is changed.
    ///
    /// Any view previously borrowed from the buffer is statically invalidated by
    /// this call, since the store may move.
    ///
    /// ```rust
    /// use growable_buffer::GrowableBuffer;
    ///
    /// let mut a = GrowableBuffer::new();
    /// let b = GrowableBuffer::from([3, 4]);
    /// a.extend_from_slice(&[1, 2])?.extend_from_slice(&b)?;
    /// assert_eq!(a, [1, 2, 3, 4]);
    /// # Ok::<(), growable_buffer::Error>(())
    /// ```
    pub fn extend_from_slice(&mut self, src: &[u8]) -> Result<&mut Self, Error> {
        let required = self
            .len
            .checked_add(src.len())
            .ok_or(Error::CapacityOverflow)?;
        if required > self.capacity() {
            self.grow_for(required)?;
        }
        let len = self.len;
        self.store[len..required].copy_from_slice(src);
        self.len = required;
        Ok(self)
    }

    /// Appends a single byte. See [`extend_from_slice`](Self::extend_from_slice).
    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<&mut Self, Error> {
        self.extend_from_slice(&[byte])
    }

    /// Ensures at least `additional` bytes can be appended without reallocating,
    /// using the same growth policy as appends.
    pub fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        if required > self.capacity() {
            self.grow_for(required)?;
        }
        Ok(())
    }

    /// Replaces the store with a larger one that holds at least `required` bytes.
    fn grow_for(&mut self, required: usize) -> Result<(), Error> {
        if required > MAX_CAPACITY {
            return Err(Error::CapacityOverflow);
        }
        let new_capacity = self
            .growth_factor
            .next_capacity(self.capacity(), required)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            "reallocating buffer store"
        );

        let mut store = alloc_store(new_capacity)?;
        store[..self.len].copy_from_slice(self.as_slice());
        self.store = store;
        Ok(())
    }
}

/// Appends every byte of the iterator.
///
/// # Panics
///
/// Panics if the new capacity overflows `isize::MAX` or cannot be allocated,
/// like `Vec`.
impl Extend<u8> for GrowableBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(e) = self.reserve(lower) {
            panic!("{e}");
        }
        for byte in iter {
            if let Err(e) = self.push(byte) {
                panic!("{e}");
            }
        }
    }
}

impl<'a> Extend<&'a u8> for GrowableBuffer {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
