// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::GrowableBuffer, byte::IntoByte, error::Error, growth::GrowthFactor};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

impl GrowableBuffer {
    /// Adopts `store` as the backing store with `len = store.len()` and the
    /// default growth factor. No bytes are copied.
    #[inline]
    pub fn wrap(store: Box<[u8]>) -> Self {
        Self {
            len: store.len(),
            store,
            growth_factor: GrowthFactor::DOUBLE,
        }
    }

    /// Like [`wrap`](Self::wrap), with an explicit growth factor.
    ///
    /// Fails with [`Error::InvalidGrowthFactor`] if `factor <= 1`.
    pub fn wrap_with_growth_factor(store: Box<[u8]>, factor: f64) -> Result<Self, Error> {
        let growth_factor = GrowthFactor::new(factor)?;
        Ok(Self {
            len: store.len(),
            store,
            growth_factor,
        })
    }

    /// Builds a buffer from arbitrary numeric values, wrapping each into a byte
    /// (see [`IntoByte`]).
    ///
    /// ```rust
    /// use growable_buffer::GrowableBuffer;
    ///
    /// let b = GrowableBuffer::from_values([1i32, 256, -1, 300]);
    /// assert_eq!(b, [1, 0, 255, 44]);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoByte,
    {
        values.into_iter().map(IntoByte::into_byte).collect()
    }

    /// Builds a buffer from an explicit list of values.
    ///
    /// Shorthand for [`from_values`](Self::from_values) over an array.
    #[inline]
    pub fn of<T: IntoByte, const M: usize>(values: [T; M]) -> Self {
        Self::from_values(values)
    }

    /// Copies `other`'s logical bytes into a tight new buffer that grows by
    /// `factor`.
    ///
    /// Fails with [`Error::InvalidGrowthFactor`] if `factor <= 1`. Use `clone()`
    /// to keep `other`'s factor instead.
    ///
    /// ```rust
    /// use growable_buffer::GrowableBuffer;
    ///
    /// let mut src = GrowableBuffer::new();
    /// src.extend_from_slice(&[1, 2, 3])?;
    /// let copy = GrowableBuffer::copy_with_growth_factor(&src, 1.5)?;
    /// assert_eq!(copy, [1, 2, 3]);
    /// assert_eq!(copy.capacity(), 3);
    /// assert_eq!(copy.growth_factor(), 1.5);
    /// # Ok::<(), growable_buffer::Error>(())
    /// ```
    pub fn copy_with_growth_factor(other: &GrowableBuffer, factor: f64) -> Result<Self, Error> {
        Self::wrap_with_growth_factor(other.as_slice().into(), factor)
    }

    /// Consumes the buffer and returns the logical bytes, dropping spare capacity.
    ///
    /// A store with no spare capacity is handed over without copying.
    pub fn into_vec(self) -> Vec<u8> {
        if self.len == self.store.len() {
            return Vec::from(self.store);
        }
        self.as_slice().to_vec()
    }

    /// Consumes the buffer and returns the whole physical store, stale tail included.
    #[inline]
    pub fn into_store(self) -> Box<[u8]> {
        self.store
    }
}

impl From<Box<[u8]>> for GrowableBuffer {
    fn from(store: Box<[u8]>) -> Self {
        Self::wrap(store)
    }
}

impl From<Vec<u8>> for GrowableBuffer {
    fn from(v: Vec<u8>) -> Self {
        Self::wrap(v.into_boxed_slice())
    }
}

impl From<&[u8]> for GrowableBuffer {
    fn from(src: &[u8]) -> Self {
        Self::wrap(src.into())
    }
}

impl<const M: usize> From<[u8; M]> for GrowableBuffer {
    fn from(src: [u8; M]) -> Self {
        Self::wrap(Box::new(src))
    }
}

impl<const M: usize> From<&[u8; M]> for GrowableBuffer {
    fn from(src: &[u8; M]) -> Self {
        Self::from(&src[..])
    }
}

impl From<GrowableBuffer> for Vec<u8> {
    fn from(b: GrowableBuffer) -> Self {
        b.into_vec()
    }
}

impl FromIterator<u8> for GrowableBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<u8>>())
    }
}

impl<'a> FromIterator<&'a u8> for GrowableBuffer {
    fn from_iter<I: IntoIterator<Item = &'a u8>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
