// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowableBuffer` type and its inherent API.
//!
//! `GrowableBuffer` owns a heap-allocated byte store of fixed physical size and
//! tracks how many leading bytes of it are in use. Appends grow the store by the
//! configured [`GrowthFactor`]; everything else is defined against the logical
//! prefix `store[..len]`.

mod element;
mod extend;
mod from;
mod new;
mod query;
mod set;
mod slice;
mod transform;

// Crate imports
use crate::growth::GrowthFactor;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable byte buffer with a logical length and a physical capacity.
///
/// `GrowableBuffer` stores bytes in a single contiguous heap allocation (the
/// *store*) and tracks a logical length `len ∈ 0..=capacity`. Only the prefix
/// `store[..len]` is visible through slices, iteration, comparison and the
/// query/transform methods; bytes past `len` are stale capacity.
///
/// # Growth
///
/// [`extend_from_slice`](GrowableBuffer::extend_from_slice) (and its
/// relatives [`push`](GrowableBuffer::push), [`reserve`](GrowableBuffer::reserve),
/// [`Extend`]) reallocate when the store is too small. The new capacity is
/// `max(capacity * growth_factor, required + 1)`, so a sequence of `n`
/// single-byte appends performs `O(log n)` reallocations and each byte costs
/// amortized `O(1)`.
///
/// # Views
///
/// - [`as_slice`](GrowableBuffer::as_slice) / [`as_mut_slice`](GrowableBuffer::as_mut_slice)
///   alias the store; writes through the mutable view are visible in the buffer.
/// - `to_vec()` (through `Deref<Target = [u8]>`) is an independent snapshot.
/// - [`data_view`](GrowableBuffer::data_view) / [`data_view_mut`](GrowableBuffer::data_view_mut)
///   give typed, bounds-checked access to `store[offset..len]`.
///
/// Every aliasing view borrows the buffer, so the compiler rejects using one
/// after a call that may reallocate:
///
/// ```rust,compile_fail
/// use growable_buffer::GrowableBuffer;
///
/// let mut buf = GrowableBuffer::from(vec![1, 2, 3]);
/// let view = buf.as_mut_slice();
/// buf.extend_from_slice(&[4]).unwrap();
/// view[0] = 9; // stale view: rejected by the borrow checker
/// ```
///
/// # Element access
///
/// [`get_element`](GrowableBuffer::get_element) returns `None` at or past the
/// logical end. [`set_element`](GrowableBuffer::set_element) refuses writes at
/// or past the logical end and hands the value back. Neither ever changes the
/// length; only appends do.
///
/// # Raw writes
///
/// [`set`](GrowableBuffer::set) writes into the *physical* store and does not
/// move the logical end. Bytes written past `len` stay invisible until a later
/// append overwrites them. Prefer `extend_from_slice` unless this is exactly
/// what you want.
///
/// # Examples
///
/// ```rust
/// use growable_buffer::GrowableBuffer;
///
/// let mut buf = GrowableBuffer::new();
/// buf.extend_from_slice(&[1, 2])?.extend_from_slice(&[3, 4])?;
/// assert_eq!(buf.len(), 4);
/// assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
///
/// let head = buf.slice(..1);
/// assert_eq!(head, GrowableBuffer::from([1]));
/// # Ok::<(), growable_buffer::Error>(())
/// ```
pub struct GrowableBuffer {
    pub(crate) store: Box<[u8]>,
    pub(crate) len: usize,
    pub(crate) growth_factor: GrowthFactor,
}

impl GrowableBuffer {
    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the physical size of the store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Returns `capacity - len`, the number of bytes that can be appended
    /// without reallocating.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.store.len() - self.len
    }

    /// Returns the factor applied to the capacity when an append overflows it.
    #[inline]
    pub const fn growth_factor(&self) -> f64 {
        self.growth_factor.get()
    }

    /// Replaces the growth factor.
    ///
    /// Returns [`Error::InvalidGrowthFactor`](crate::Error::InvalidGrowthFactor)
    /// for values that are not finite and greater than `1`; the previous factor
    /// is kept in that case.
    #[inline]
    pub fn set_growth_factor(&mut self, factor: f64) -> Result<(), crate::Error> {
        self.growth_factor = GrowthFactor::new(factor)?;
        Ok(())
    }

    /// Sets `len = 0` without touching the store or its capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }
}

impl fmt::Debug for GrowableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("growth_factor", &self.growth_factor)
            .field("bytes", &self.as_slice())
            .finish()
    }
}

/// Renders as `GrowableBuffer(len) [b0, b1, ...]`.
impl fmt::Display for GrowableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GrowableBuffer({}) [", self.len)?;
        for (i, b) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{b}")?;
        }
        f.write_str("]")
    }
}

impl PartialEq for GrowableBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for GrowableBuffer {}
impl Ord for GrowableBuffer {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl PartialOrd for GrowableBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Hash for GrowableBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl PartialEq<[u8]> for GrowableBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}
impl PartialEq<&[u8]> for GrowableBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}
impl<const M: usize> PartialEq<[u8; M]> for GrowableBuffer {
    fn eq(&self, other: &[u8; M]) -> bool {
        self.as_slice() == other
    }
}
impl PartialEq<alloc::vec::Vec<u8>> for GrowableBuffer {
    fn eq(&self, other: &alloc::vec::Vec<u8>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Copies the logical contents into a store of exactly `len` bytes and keeps
/// the growth factor. See [`GrowableBuffer::copy_with_growth_factor`] to pick a
/// different one.
impl Clone for GrowableBuffer {
    fn clone(&self) -> Self {
        Self {
            store: self.as_slice().into(),
            len: self.len,
            growth_factor: self.growth_factor,
        }
    }
}

impl Deref for GrowableBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl DerefMut for GrowableBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl AsRef<[u8]> for GrowableBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
impl AsMut<[u8]> for GrowableBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl Borrow<[u8]> for GrowableBuffer {
    fn borrow(&self) -> &[u8] {
        self.as_slice()
    }
}
impl BorrowMut<[u8]> for GrowableBuffer {
    fn borrow_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}
