// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowableBuffer`](crate::GrowableBuffer).
//!
//! - `IntoIter` yields bytes by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&GrowableBuffer` and `&mut GrowableBuffer` iterate as slices.
//!
//! All of them stop at the logical end; spare capacity is never yielded.

// Crate imports
use crate::buf::GrowableBuffer;

// Alloc imports
use alloc::vec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `GrowableBuffer::into_iter()`.
///
/// Holds only the logical bytes; the store's spare capacity is released when
/// the iterator is created.
#[derive(Debug, Clone)]
pub struct IntoIter(vec::IntoIter<u8>);

impl IntoIter {
    /// The bytes not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl Iterator for IntoIter {
    type Item = u8;
    #[inline]
    fn next(&mut self) -> Option<u8> {
        self.0.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
    #[inline]
    fn nth(&mut self, n: usize) -> Option<u8> {
        self.0.nth(n)
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        self.0.next_back()
    }
}
impl FusedIterator for IntoIter {}
impl ExactSizeIterator for IntoIter {}

impl<'a> IntoIterator for &'a GrowableBuffer {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a> IntoIterator for &'a mut GrowableBuffer {
    type Item = &'a mut u8;
    type IntoIter = core::slice::IterMut<'a, u8>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl IntoIterator for GrowableBuffer {
    type Item = u8;
    type IntoIter = IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.into_vec().into_iter())
    }
}
