// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowableBuffer`.
//!
//! These errors represent bounds, growth-factor and allocation conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`GrowableBuffer`](crate::GrowableBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An offset or position was outside the addressable region.
    ///
    /// Returned by data views when a read or write crosses the logical end, and
    /// by [`GrowableBuffer::set`](crate::GrowableBuffer::set) when the write
    /// would run past the physical capacity.
    OutOfBounds,
    /// A growth factor was not a finite number greater than `1`.
    InvalidGrowthFactor,
    /// A required capacity does not fit in `isize::MAX` bytes.
    CapacityOverflow,
    /// The allocator could not provide a store of the requested size.
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("offset out of bounds"),
            Self::InvalidGrowthFactor => f.write_str("growth factor must be greater than 1"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed => f.write_str("memory allocation failed"),
        }
    }
}

impl CoreError for Error {}
