// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buf::GrowableBuffer,
    data_view::{DataView, DataViewMut},
    error::Error,
};

impl GrowableBuffer {
    /// Returns the logical prefix as a shared slice (`&self.store[..len]`).
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.store[..self.len]
    }

    /// Returns the logical prefix as a mutable slice (`&mut self.store[..len]`).
    ///
    /// Writes through the slice are writes to the buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let len = self.len;
        &mut self.store[..len]
    }

    /// Returns a typed read view over `store[offset..len]`.
    ///
    /// Offsets inside the view are relative to `offset`. Fails with
    /// [`Error::OutOfBounds`] if `offset > len`.
    ///
    /// ```rust
    /// use growable_buffer::{Error, GrowableBuffer};
    ///
    /// let b: GrowableBuffer = (1..=18).collect();
    /// let view = b.data_view(4)?;
    /// assert_eq!(view.get_u8(0)?, 5);
    /// assert_eq!(view.get_u8(13)?, 18);
    /// assert_eq!(view.get_u8(14), Err(Error::OutOfBounds));
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn data_view(&self, offset: usize) -> Result<DataView<'_>, Error> {
        self.as_slice()
            .get(offset..)
            .map(DataView::new)
            .ok_or(Error::OutOfBounds)
    }

    /// Returns a typed read/write view over `store[offset..len]`.
    ///
    /// Writes go straight to the store and never change the logical length.
    /// Fails with [`Error::OutOfBounds`] if `offset > len`.
    #[inline]
    pub fn data_view_mut(&mut self, offset: usize) -> Result<DataViewMut<'_>, Error> {
        self.as_mut_slice()
            .get_mut(offset..)
            .map(DataViewMut::new)
            .ok_or(Error::OutOfBounds)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowableBuffer};
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn test_mut_slice_aliases_store() {
        let mut b = GrowableBuffer::from([1, 2, 3, 4]);
        b.as_mut_slice()[0] = 42;
        assert_eq!(b.as_slice()[0], 42);
        assert_eq!(b.get_element(0), Some(42));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut b = GrowableBuffer::from([1, 2, 3]);
        let mut snap = b.to_vec();
        snap[0] = 99;
        assert_eq!(b, [1, 2, 3]);
        b.as_mut_slice()[1] = 20;
        assert_eq!(snap, [99, 2, 3]);
    }

    #[test]
    fn test_slices_cover_logical_prefix_only() {
        let mut b = GrowableBuffer::new();
        b.extend_from_slice(&[1, 2]).unwrap();
        assert_eq!(b.as_slice().len(), 2);
        assert_eq!(b.as_mut_slice().len(), 2);
    }

    #[test]
    fn test_data_view_bounds_follow_logical_length() {
        let data: [u8; 18] = core::array::from_fn(|i| i as u8 + 1);
        let b = GrowableBuffer::from(data);

        let view = b.data_view(0).unwrap();
        assert_eq!(view.byte_len(), 18);
        assert_eq!(view.get_u8(0), Ok(1));
        assert_eq!(view.get_u8(17), Ok(18));

        let view = b.data_view(4).unwrap();
        assert_eq!(view.get_u8(0), Ok(5));
        assert_eq!(view.get_u8(13), Ok(18));
        assert_eq!(view.get_u8(14), Err(Error::OutOfBounds));
        assert_eq!(view.get_u8(17), Err(Error::OutOfBounds));

        assert_eq!(b.data_view(18).unwrap().byte_len(), 0);
        assert_eq!(b.data_view(19).unwrap_err(), Error::OutOfBounds);
    }

    #[test]
    fn test_data_view_ignores_spare_capacity() {
        let mut b = GrowableBuffer::new();
        b.extend_from_slice(&[1, 2, 3]).unwrap();
        assert!(b.capacity() > 3);
        assert_eq!(b.data_view(0).unwrap().get_u8(3), Err(Error::OutOfBounds));
    }

    #[test]
    fn test_data_view_mut_writes_through_without_extending() {
        let mut b = GrowableBuffer::from([0; 6]);
        {
            let mut view = b.data_view_mut(2).unwrap();
            view.set_u16_be(0, 0x0102).unwrap();
            view.set_u8(3, 9).unwrap();
            assert_eq!(view.set_u8(4, 1), Err(Error::OutOfBounds));
        }
        assert_eq!(b, [0, 0, 1, 2, 0, 9]);
        assert_eq!(b.len(), 6);
        assert_eq!(b.data_view_mut(7).unwrap_err(), Error::OutOfBounds);
    }

    proptest! {
        #[test]
        fn prop_mutating_snapshot_leaves_buffer_unchanged(
            bytes in proptest::collection::vec(any::<u8>(), 0..256),
            extra in 0usize..64,
        ) {
            let mut b = GrowableBuffer::new();
            b.extend_from_slice(&bytes).unwrap();
            b.reserve(extra).unwrap();

            let mut snap = b.to_vec();
            for x in snap.iter_mut() {
                *x = x.wrapping_add(1);
            }
            snap.push(0);

            prop_assert_eq!(b.as_slice(), &bytes[..]);
            prop_assert_eq!(b.len(), bytes.len());
            let expected: Vec<u8> = bytes.iter().map(|x| x.wrapping_add(1)).collect();
            prop_assert_eq!(&snap[..bytes.len()], &expected[..]);
        }
    }
}
