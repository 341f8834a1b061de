// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Growth policy for [`GrowableBuffer`](crate::GrowableBuffer).
//!
//! The policy has two parts:
//!
//! - a fresh buffer starts with `2 * factor^4` bytes of capacity (32 bytes for
//!   the default factor of 2);
//! - when an append needs more room than the store has, the new capacity is
//!   `max(capacity * factor, required + 1)`, truncated to an integer and capped
//!   at [`MAX_CAPACITY`].
//!
//! The `+ 1` keeps an exact-fit append from forcing another reallocation on the
//! very next single-byte append.

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::fmt;

/// Largest store the buffer will ever request, in bytes.
pub const MAX_CAPACITY: usize = isize::MAX as usize;

/// A validated growth factor: a finite number strictly greater than `1`.
///
/// ```rust
/// use growable_buffer::{Error, GrowthFactor};
///
/// assert_eq!(GrowthFactor::new(1.5).unwrap().get(), 1.5);
/// assert_eq!(GrowthFactor::new(1.0), Err(Error::InvalidGrowthFactor));
/// assert_eq!(GrowthFactor::default().get(), 2.0);
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct GrowthFactor(f64);

impl GrowthFactor {
    /// The default factor (`2`): capacity doubles on each reallocation.
    pub const DOUBLE: Self = Self(2.0);

    /// Validates `factor`, returning [`Error::InvalidGrowthFactor`] unless it is
    /// finite and greater than `1`.
    #[inline]
    pub fn new(factor: f64) -> Result<Self, Error> {
        // `!(x > 1.0)` also rejects NaN.
        if !(factor > 1.0) || !factor.is_finite() {
            return Err(Error::InvalidGrowthFactor);
        }
        Ok(Self(factor))
    }

    /// Returns the factor as a plain number.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Capacity of a fresh, empty buffer: `2 * factor^4`, truncated.
    pub fn initial_capacity(self) -> Result<usize, Error> {
        let f = self.0;
        let bytes = 2.0 * f * f * f * f;
        if bytes >= MAX_CAPACITY as f64 {
            return Err(Error::CapacityOverflow);
        }
        Ok(bytes as usize)
    }

    /// Capacity to reallocate to when `required` bytes no longer fit in `current`.
    ///
    /// The result is always `>= required`.
    pub fn next_capacity(self, current: usize, required: usize) -> Result<usize, Error> {
        if required > MAX_CAPACITY {
            return Err(Error::CapacityOverflow);
        }
        let scaled = current as f64 * self.0;
        let scaled = if scaled >= MAX_CAPACITY as f64 {
            MAX_CAPACITY
        } else {
            scaled as usize
        };
        Ok(scaled.max(required.saturating_add(1)).min(MAX_CAPACITY))
    }
}

impl Default for GrowthFactor {
    fn default() -> Self {
        Self::DOUBLE
    }
}

impl TryFrom<f64> for GrowthFactor {
    type Error = Error;

    fn try_from(factor: f64) -> Result<Self, Error> {
        Self::new(factor)
    }
}

impl From<GrowthFactor> for f64 {
    fn from(factor: GrowthFactor) -> Self {
        factor.0
    }
}

impl fmt::Debug for GrowthFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for GrowthFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Allocates a zeroed store of exactly `capacity` bytes without aborting on failure.
pub(crate) fn alloc_store(capacity: usize) -> Result<Box<[u8]>, Error> {
    if capacity > MAX_CAPACITY {
        return Err(Error::CapacityOverflow);
    }
    let mut store = Vec::new();
    store
        .try_reserve_exact(capacity)
        .map_err(|_| Error::AllocFailed)?;
    store.resize(capacity, 0);
    Ok(store.into_boxed_slice())
}
