// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buf::GrowableBuffer,
    error::Error,
    growth::{alloc_store, GrowthFactor},
};

// Alloc imports
use alloc::vec;

/// Initial capacity for the default growth factor (`2 * 2^4`).
const DEFAULT_INITIAL_CAPACITY: usize = 32;

impl GrowableBuffer {
    /// Constructs an empty buffer with the default growth factor (`2`) and an
    /// initial capacity of 32 bytes.
    #[inline]
    pub fn new() -> Self {
        Self {
            store: vec![0; DEFAULT_INITIAL_CAPACITY].into_boxed_slice(),
            len: 0,
            growth_factor: GrowthFactor::DOUBLE,
        }
    }

    /// Constructs an empty buffer with the given growth factor.
    ///
    /// The initial capacity is `2 * factor^4` bytes. Fails with
    /// [`Error::InvalidGrowthFactor`] if `factor <= 1`, and with
    /// [`Error::CapacityOverflow`] / [`Error::AllocFailed`] if that initial
    /// store cannot be allocated.
    pub fn with_growth_factor(factor: f64) -> Result<Self, Error> {
        let growth_factor = GrowthFactor::new(factor)?;
        Ok(Self {
            store: alloc_store(growth_factor.initial_capacity()?)?,
            len: 0,
            growth_factor,
        })
    }

    /// Constructs an empty buffer with exactly `capacity` bytes of store and the
    /// default growth factor.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            store: alloc_store(capacity)?,
            len: 0,
            growth_factor: GrowthFactor::DOUBLE,
        })
    }
}

impl Default for GrowableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowableBuffer};

    #[test]
    fn test_new_matches_default_factor_policy() {
        let b = GrowableBuffer::new();
        let d = GrowableBuffer::default();
        let g = GrowableBuffer::with_growth_factor(2.0).unwrap();
        assert_eq!(b.capacity(), 32);
        assert_eq!(d.capacity(), 32);
        assert_eq!(g.capacity(), 32);
        assert_eq!(b.growth_factor(), 2.0);
        assert!(b.is_empty());
    }

    #[test]
    fn test_with_growth_factor_sizes_initial_store() {
        let b = GrowableBuffer::with_growth_factor(1.5).unwrap();
        assert_eq!(b.capacity(), 10);
        assert_eq!(b.growth_factor(), 1.5);
        let b = GrowableBuffer::with_growth_factor(4.0).unwrap();
        assert_eq!(b.capacity(), 512);
    }

    #[test]
    fn test_with_growth_factor_rejects_invalid() {
        for bad in [1.0, 0.0, -3.0] {
            assert_eq!(
                GrowableBuffer::with_growth_factor(bad).unwrap_err(),
                Error::InvalidGrowthFactor
            );
        }
        assert_eq!(
            GrowableBuffer::with_growth_factor(1e100).unwrap_err(),
            Error::CapacityOverflow
        );
    }

    #[test]
    fn test_with_capacity() {
        let b = GrowableBuffer::with_capacity(0).unwrap();
        assert_eq!(b.capacity(), 0);
        let b = GrowableBuffer::with_capacity(100).unwrap();
        assert_eq!(b.capacity(), 100);
        assert_eq!(b.len(), 0);
    }
}
