// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::GrowableBuffer, error::Error};

impl GrowableBuffer {
    /// Copies `src` into the **physical** store starting at `offset`.
    ///
    /// - `len` is never changed, so bytes written past the logical end stay
    ///   invisible until an append covers them.
    /// - The store never grows: if `offset + src.len()` exceeds
    ///   [`capacity`](Self::capacity), this returns [`Error::OutOfBounds`] and
    ///   writes nothing.
    ///
    /// `src` may be another buffer, in which case its logical bytes are used.
    ///
    /// ```rust
    /// use growable_buffer::GrowableBuffer;
    ///
    /// let mut dest = GrowableBuffer::from([1, 2, 3, 4]);
    /// dest.set([4u8, 5, 6], 0)?;
    /// assert_eq!(dest, [4, 5, 6, 4]);
    /// # Ok::<(), growable_buffer::Error>(())
    /// ```
    pub fn set<S: AsRef<[u8]>>(&mut self, src: S, offset: usize) -> Result<(), Error> {
        let src = src.as_ref();
        let end = offset.checked_add(src.len()).ok_or(Error::OutOfBounds)?;
        self.store
            .get_mut(offset..end)
            .ok_or(Error::OutOfBounds)?
            .copy_from_slice(src);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowableBuffer};

    #[test]
    fn test_set_overwrites_prefix() {
        let mut dest = GrowableBuffer::from([1, 2, 3, 4]);
        dest.set([4u8, 5, 6], 0).unwrap();
        assert_eq!(dest, [4, 5, 6, 4]);
        dest.set(&[9u8][..], 3).unwrap();
        assert_eq!(dest, [4, 5, 6, 9]);
    }

    #[test]
    fn test_set_from_buffer_uses_logical_bytes() {
        let mut src = GrowableBuffer::from([7, 8, 9]);
        src.truncate(2);
        let mut dest = GrowableBuffer::from([0; 4]);
        dest.set(&src, 1).unwrap();
        assert_eq!(dest, [0, 7, 8, 0]);
    }

    #[test]
    fn test_set_past_len_writes_spare_capacity_only() {
        let mut b = GrowableBuffer::new();
        b.extend_from_slice(&[1, 2]).unwrap();
        b.set([5u8, 6], 4).unwrap();
        assert_eq!(b.len(), 2);
        assert_eq!(b, [1, 2]);
        // Stale bytes surface once the logical end reaches them.
        b.extend_from_slice(&[3, 4]).unwrap();
        b.truncate(4);
        let store = b.into_store();
        assert_eq!(&store[..6], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_set_past_capacity_fails_without_writing() {
        let mut b = GrowableBuffer::from([1, 2, 3]);
        assert_eq!(b.set([9u8, 9], 2), Err(Error::OutOfBounds));
        assert_eq!(b.set([9u8], usize::MAX), Err(Error::OutOfBounds));
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.set([0u8; 0], 3), Ok(()));
    }
}
