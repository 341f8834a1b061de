// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transforms over the logical prefix.
//!
//! `slice`, `map`, `filter`, `reversed`, `sorted`, `sorted_by` and
//! `copied_within` build a **new** buffer that owns its bytes and inherits the
//! source's growth factor; the source is left untouched. `fill` and
//! `fill_range` are the in-place exceptions and return `self`.
//!
//! The in-place slice primitives (`sort`, `reverse`, `copy_within`, ...) remain
//! available through `DerefMut<Target = [u8]>`.
//!
//! Range arguments follow slice semantics and panic when out of bounds or
//! inverted.

// Crate imports
use crate::{buf::GrowableBuffer, byte::IntoByte};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{cmp::Ordering, ops::RangeBounds};

impl GrowableBuffer {
    /// Wraps `bytes` in a buffer that shares this buffer's growth factor.
    #[inline]
    fn derive(&self, bytes: Vec<u8>) -> Self {
        Self {
            len: bytes.len(),
            store: bytes.into_boxed_slice(),
            growth_factor: self.growth_factor,
        }
    }

    /// Returns a copy of the bytes in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds of the logical prefix or inverted.
    #[inline]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let range = (range.start_bound().cloned(), range.end_bound().cloned());
        self.derive(self.as_slice()[range].to_vec())
    }

    /// Returns a buffer holding `f(byte)` for every byte, wrapped into a byte
    /// (see [`IntoByte`]).
    ///
    /// ```rust
    /// use growable_buffer::GrowableBuffer;
    ///
    /// let b = GrowableBuffer::from([1, 2, 200]);
    /// assert_eq!(b.map(|x| u16::from(x) * 2), [2, 4, 144]);
    /// ```
    #[inline]
    pub fn map<T: IntoByte, F: FnMut(u8) -> T>(&self, mut f: F) -> Self {
        self.derive(self.values().map(|b| f(b).into_byte()).collect())
    }

    /// Returns a buffer holding only the bytes for which `f` holds, in order.
    #[inline]
    pub fn filter<F: FnMut(u8) -> bool>(&self, mut f: F) -> Self {
        self.derive(self.values().filter(|&b| f(b)).collect())
    }

    /// Returns the bytes in reverse order.
    #[inline]
    pub fn reversed(&self) -> Self {
        self.derive(self.values().rev().collect())
    }

    /// Returns the bytes sorted in ascending order.
    #[inline]
    pub fn sorted(&self) -> Self {
        let mut bytes = self.to_vec();
        bytes.sort_unstable();
        self.derive(bytes)
    }

    /// Returns the bytes sorted with the comparator `cmp` (stable).
    ///
    /// ```rust
    /// use growable_buffer::GrowableBuffer;
    ///
    /// let b = GrowableBuffer::from([1, 3, 2]);
    /// assert_eq!(b.sorted_by(|a, b| b.cmp(a)), [3, 2, 1]);
    /// ```
    #[inline]
    pub fn sorted_by<F: FnMut(&u8, &u8) -> Ordering>(&self, cmp: F) -> Self {
        let mut bytes = self.to_vec();
        bytes.sort_by(cmp);
        self.derive(bytes)
    }

    /// Returns a copy in which the bytes in `src` have been copied to start at
    /// `dest` (overlap-safe), as `<[u8]>::copy_within` would do in place.
    ///
    /// # Panics
    ///
    /// Panics if `src` is out of bounds or inverted, or if
    /// `dest + src.len()` exceeds the length.
    #[inline]
    pub fn copied_within<R: RangeBounds<usize>>(&self, src: R, dest: usize) -> Self {
        let mut bytes = self.to_vec();
        bytes.copy_within(src, dest);
        self.derive(bytes)
    }

    /// Sets every byte of the logical prefix to `value`, in place.
    ///
    /// ```rust
    /// use growable_buffer::GrowableBuffer;
    ///
    /// let mut b = GrowableBuffer::from([0, 0, 0, 0]);
    /// assert_eq!(*b.fill(2), [2, 2, 2, 2]);
    /// ```
    #[inline]
    pub fn fill(&mut self, value: u8) -> &mut Self {
        self.as_mut_slice().fill(value);
        self
    }

    /// Sets every byte in `range` to `value`, in place.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds of the logical prefix or inverted.
    #[inline]
    pub fn fill_range<R: RangeBounds<usize>>(&mut self, value: u8, range: R) -> &mut Self {
        let range = (range.start_bound().cloned(), range.end_bound().cloned());
        self.as_mut_slice()[range].fill(value);
        self
    }
}
