// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only queries over the logical prefix.
//!
//! Each method is a thin wrapper over the equivalent slice or iterator
//! operation on `as_slice()`. None of them sees spare capacity, and none
//! returns a buffer.

// Crate imports
use crate::buf::GrowableBuffer;

// Alloc imports
use alloc::string::String;

// Core imports
use core::{
    fmt::Write,
    iter::{Copied, Enumerate},
    ops::Range,
    slice,
};

impl GrowableBuffer {
    /// Iterates over `(index, byte)` pairs.
    #[inline]
    pub fn entries(&self) -> Enumerate<Copied<slice::Iter<'_, u8>>> {
        self.values().enumerate()
    }

    /// Iterates over the valid indices, `0..len`.
    #[inline]
    pub fn keys(&self) -> Range<usize> {
        0..self.len
    }

    /// Iterates over the bytes by value.
    #[inline]
    pub fn values(&self) -> Copied<slice::Iter<'_, u8>> {
        self.as_slice().iter().copied()
    }

    /// Returns `true` if `f` holds for every byte (vacuously true when empty).
    #[inline]
    pub fn every<F: FnMut(u8) -> bool>(&self, f: F) -> bool {
        self.values().all(f)
    }

    /// Returns `true` if `f` holds for at least one byte.
    #[inline]
    pub fn some<F: FnMut(u8) -> bool>(&self, f: F) -> bool {
        self.values().any(f)
    }

    /// Returns the first byte for which `f` holds.
    #[inline]
    pub fn find<F: FnMut(u8) -> bool>(&self, mut f: F) -> Option<u8> {
        self.values().find(|&b| f(b))
    }

    /// Returns the index of the first byte for which `f` holds.
    #[inline]
    pub fn find_index<F: FnMut(u8) -> bool>(&self, f: F) -> Option<usize> {
        self.values().position(f)
    }

    /// Calls `f` on every byte, front to back.
    #[inline]
    pub fn for_each<F: FnMut(u8)>(&self, f: F) {
        self.values().for_each(f)
    }

    /// Returns `true` if `value` occurs in the logical prefix.
    #[inline]
    pub fn includes(&self, value: u8) -> bool {
        self.as_slice().contains(&value)
    }

    /// Returns the index of the first occurrence of `value`.
    #[inline]
    pub fn index_of(&self, value: u8) -> Option<usize> {
        self.as_slice().iter().position(|&b| b == value)
    }

    /// Returns the index of the last occurrence of `value`.
    #[inline]
    pub fn last_index_of(&self, value: u8) -> Option<usize> {
        self.as_slice().iter().rposition(|&b| b == value)
    }

    /// Renders the bytes in decimal, separated by `sep`.
    ///
    /// ```rust
    /// use growable_buffer::GrowableBuffer;
    ///
    /// assert_eq!(GrowableBuffer::from([1, 20, 255]).join(","), "1,20,255");
    /// ```
    pub fn join(&self, sep: &str) -> String {
        let mut out = String::new();
        for (i, b) in self.entries() {
            if i > 0 {
                out.push_str(sep);
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{b}");
        }
        out
    }

    /// Folds the bytes front to back, starting from `init`.
    #[inline]
    pub fn reduce<A, F: FnMut(A, u8) -> A>(&self, init: A, f: F) -> A {
        self.values().fold(init, f)
    }

    /// Folds the bytes back to front, starting from `init`.
    #[inline]
    pub fn reduce_right<A, F: FnMut(A, u8) -> A>(&self, init: A, f: F) -> A {
        self.values().rfold(init, f)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowableBuffer;
    use alloc::vec::Vec;

    #[test]
    fn test_iteration_helpers() {
        let b = GrowableBuffer::from([1, 2, 3]);
        assert_eq!(b.values().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(b.keys().collect::<Vec<_>>(), [0, 1, 2]);
        let mut entries = b.entries();
        assert_eq!(entries.next(), Some((0, 1)));
        assert_eq!(entries.next(), Some((1, 2)));
        assert_eq!(entries.next(), Some((2, 3)));
        assert_eq!(entries.next(), None);
    }

    #[test]
    fn test_queries_ignore_spare_capacity() {
        let mut b = GrowableBuffer::new();
        b.extend_from_slice(&[5, 5, 7]).unwrap();
        // The store is zero-filled past len.
        assert!(!b.includes(0));
        assert_eq!(b.index_of(0), None);
        assert!(b.every(|x| x >= 5));
        assert_eq!(b.keys().len(), 3);
        assert_eq!(b.values().count(), 3);
    }

    #[test]
    fn test_predicates() {
        let b = GrowableBuffer::from([42, 42, 42]);
        assert!(b.every(|x| x == 42));
        assert!(!b.some(|x| x == 0));
        assert!(GrowableBuffer::new().every(|_| false));
        assert!(!GrowableBuffer::new().some(|_| true));

        let b = GrowableBuffer::from([1, 4, 9, 16]);
        assert_eq!(b.find(|x| x > 3), Some(4));
        assert_eq!(b.find(|x| x > 100), None);
        assert_eq!(b.find_index(|x| x % 3 == 0), Some(2));
        assert_eq!(b.find_index(|x| x == 2), None);
    }

    #[test]
    fn test_searches() {
        let b = GrowableBuffer::from([1, 2, 3, 2]);
        assert!(b.includes(3));
        assert!(!b.includes(4));
        assert_eq!(b.index_of(2), Some(1));
        assert_eq!(b.last_index_of(2), Some(3));
        assert_eq!(b.index_of(9), None);
        assert_eq!(b.last_index_of(9), None);
    }

    #[test]
    fn test_join_and_folds() {
        let b = GrowableBuffer::from([1, 2, 3]);
        assert_eq!(b.join(", "), "1, 2, 3");
        assert_eq!(GrowableBuffer::new().join(","), "");
        assert_eq!(b.reduce(0u32, |acc, x| acc + u32::from(x)), 6);
        assert_eq!(
            b.reduce(Vec::new(), |mut acc, x| {
                acc.push(x);
                acc
            }),
            [1, 2, 3]
        );
        assert_eq!(
            b.reduce_right(Vec::new(), |mut acc, x| {
                acc.push(x);
                acc
            }),
            [3, 2, 1]
        );
    }

    #[test]
    fn test_for_each_and_borrowed_iteration() {
        let b = GrowableBuffer::from([1, 2, 3, 4, 5]);
        let mut seen = Vec::new();
        b.for_each(|x| seen.push(x));
        assert_eq!(seen, [1, 2, 3, 4, 5]);

        let mut i = 0;
        for &x in &b {
            assert_eq!(x, seen[i]);
            i += 1;
        }
        assert_eq!(i, 5);
    }
}
