// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowableBuffer`](crate::GrowableBuffer).
//!
//! `buf[i]` and `buf[range]` address the logical prefix `[0..len)` only and
//! panic like slices when out of bounds, even if the index lies inside the
//! store's spare capacity. Use
//! [`get_element`](crate::GrowableBuffer::get_element) /
//! [`set_element`](crate::GrowableBuffer::set_element) for the non-panicking
//! forms.

// Crate imports
use crate::buf::GrowableBuffer;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<I: SliceIndex<[u8]>> Index<I> for GrowableBuffer {
    type Output = I::Output;
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<I: SliceIndex<[u8]>> IndexMut<I> for GrowableBuffer {
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowableBuffer;

    #[test]
    fn test_indexing_and_ranges() {
        let mut b = GrowableBuffer::from([0, 1, 2, 3, 4]);

        assert_eq!(b[0], 0);
        assert_eq!(&b[1..3], &[1, 2]);
        assert_eq!(&b[2..], &[2, 3, 4]);
        assert_eq!(&b[..3], &[0, 1, 2]);
        assert_eq!(&b[..=2], &[0, 1, 2]);
        assert_eq!(&b[1..=3], &[1, 2, 3]);
        assert_eq!(&b[..], &[0, 1, 2, 3, 4]);

        b[1..3].copy_from_slice(&[10, 20]);
        assert_eq!(b.as_slice(), &[0, 10, 20, 3, 4]);
        b[4] = 40;
        assert_eq!(b.get_element(4), Some(40));
    }

    #[test]
    #[should_panic]
    fn test_index_in_spare_capacity_panics() {
        let mut b = GrowableBuffer::new();
        b.extend_from_slice(&[1]).unwrap();
        assert!(b.capacity() > 1);
        let _ = b[1];
    }

    #[test]
    #[should_panic]
    fn test_index_mut_past_len_panics() {
        let mut b = GrowableBuffer::from([1, 2, 3]);
        b.truncate(2);
        b[2] = 0;
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let b = GrowableBuffer::from([1, 2, 3]);
        let _ = &b[2..1];
    }

    #[test]
    fn test_empty_ranges_work() {
        let b = GrowableBuffer::from([1, 2, 3]);
        assert_eq!(&b[1..1], &[] as &[u8]);
        assert_eq!(&b[3..3], &[] as &[u8]);
    }
}
