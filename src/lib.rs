// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-buffer`
//!
//! A `no_std` (+ `alloc`) growable byte buffer for accumulating binary data,
//! **with no `unsafe`**.
//!
//! The core type, [`GrowableBuffer`], owns a heap-allocated byte store and
//! tracks a logical length `len ∈ 0..=capacity`. Appends grow the store
//! geometrically by a configurable [`GrowthFactor`], so building a message one
//! chunk at a time costs amortized `O(1)` per byte instead of a full copy per
//! append.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You assemble binary messages incrementally and want explicit control
//!   over how the capacity grows.
//! - You want typed, bounds-checked reads and writes (`u16`..`f64`, either
//!   endianness) bounded by what has actually been written, not by capacity.
//! - You need to hand out views of the live bytes and want the compiler to
//!   reject any view that would outlive a reallocation.
//!
//! If you only need a plain growable byte vector, `Vec<u8>` is simpler.
//!
//! ## High-level semantics
//!
//! - **Logical length vs. capacity.** Only `store[..len]` is visible through
//!   slices, indexing, iteration, comparison, queries and transforms. Bytes past
//!   `len` are spare capacity and may be stale.
//! - **Growth.** When an append does not fit, the store is replaced by one of
//!   `max(capacity * growth_factor, required + 1)` bytes. A fresh buffer starts
//!   at `2 * growth_factor^4` bytes (32 for the default factor 2).
//! - **Growth factor.** Must be finite and greater than `1`; anything else is
//!   rejected with [`Error::InvalidGrowthFactor`] and the old factor is kept.
//! - **Views.** [`GrowableBuffer::as_slice`], [`GrowableBuffer::as_mut_slice`],
//!   [`GrowableBuffer::data_view`] and [`GrowableBuffer::data_view_mut`] borrow
//!   the live store; `to_vec()` is an independent snapshot.
//! - **Transforms.** `slice`, `map`, `filter`, `reversed`, `sorted`,
//!   `sorted_by` and `copied_within` return new buffers that inherit the growth
//!   factor. `fill` / `fill_range` work in place and return `&mut Self`.
//! - **Element access.** [`GrowableBuffer::get_element`] returns `None` at or
//!   past `len`; [`GrowableBuffer::set_element`] refuses such writes. Only appends
//!   move the logical end.
//! - **Raw writes.** [`GrowableBuffer::set`] writes into the physical store at
//!   any offset below the capacity *without* moving `len`.
//!
//! ## Errors and panics
//!
//! Fallible operations return [`Error`] and leave the buffer unchanged:
//! bounds violations of data views and `set`, invalid growth factors, and
//! capacities that overflow `isize::MAX` or cannot be allocated.
//! Slice-style indexing and range arguments panic exactly like slices.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for [`GrowableBuffer`] as a byte
//!   string. The growth factor is not serialized.
//! - `tracing`: emits a `TRACE` event for every store reallocation.
//!
//! ## Example
//!
//! ```rust
//! use growable_buffer::GrowableBuffer;
//!
//! let mut msg = GrowableBuffer::new();
//! msg.extend_from_slice(&[0, 0])?                // length prefix placeholder
//!     .extend_from_slice(b"hello")?;
//!
//! let body_len = (msg.len() - 2) as u16;
//! msg.data_view_mut(0)?.set_u16_be(0, body_len)?;
//!
//! assert_eq!(msg.data_view(0)?.get_u16_be(0)?, 5);
//! assert_eq!(&msg[2..], b"hello");
//! # Ok::<(), growable_buffer::Error>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod buf;
mod byte;
mod data_view;
mod error;
mod growth;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use buf::GrowableBuffer;
pub use byte::IntoByte;
pub use data_view::{DataView, DataViewMut};
pub use error::Error;
pub use growth::{GrowthFactor, MAX_CAPACITY};
pub use iter::IntoIter;
