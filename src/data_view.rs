// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, bounds-checked views into a [`GrowableBuffer`](crate::GrowableBuffer).
//!
//! A view covers `store[offset..len]` of the buffer it was taken from: its
//! upper bound is the buffer's *logical* length, not its capacity. All reads
//! and writes are addressed relative to the view start and fail with
//! [`Error::OutOfBounds`] if any byte of the access lies outside the view.
//!
//! Multi-byte accessors come in little-endian (`_le`) and big-endian (`_be`)
//! flavors.
//!
//! Views borrow the buffer, so they cannot outlive a reallocation.

// Crate imports
use crate::error::Error;

/// Read-only typed view returned by
/// [`GrowableBuffer::data_view`](crate::GrowableBuffer::data_view).
#[derive(Debug, Clone, Copy)]
pub struct DataView<'a> {
    bytes: &'a [u8],
}

/// Read/write typed view returned by
/// [`GrowableBuffer::data_view_mut`](crate::GrowableBuffer::data_view_mut).
///
/// Writes land in the buffer's store but never move its logical end.
#[derive(Debug)]
pub struct DataViewMut<'a> {
    bytes: &'a mut [u8],
}

#[inline]
fn read<const W: usize>(bytes: &[u8], at: usize) -> Result<[u8; W], Error> {
    let end = at.checked_add(W).ok_or(Error::OutOfBounds)?;
    let mut out = [0u8; W];
    out.copy_from_slice(bytes.get(at..end).ok_or(Error::OutOfBounds)?);
    Ok(out)
}

#[inline]
fn write<const W: usize>(bytes: &mut [u8], at: usize, src: [u8; W]) -> Result<(), Error> {
    let end = at.checked_add(W).ok_or(Error::OutOfBounds)?;
    bytes
        .get_mut(at..end)
        .ok_or(Error::OutOfBounds)?
        .copy_from_slice(&src);
    Ok(())
}

macro_rules! impl_getters {
    ($view:ident; $($t:ty => $le:ident, $be:ident;)*) => {
        impl $view<'_> {
            /// Number of bytes addressable through this view.
            #[inline]
            pub fn byte_len(&self) -> usize {
                self.bytes.len()
            }

            /// Reads the byte at `at`.
            #[inline]
            pub fn get_u8(&self, at: usize) -> Result<u8, Error> {
                self.bytes.get(at).copied().ok_or(Error::OutOfBounds)
            }

            /// Reads the byte at `at` as a signed value.
            #[inline]
            pub fn get_i8(&self, at: usize) -> Result<i8, Error> {
                self.get_u8(at).map(|b| b as i8)
            }

            $(
                #[doc = concat!("Reads a little-endian `", stringify!($t), "` starting at `at`.")]
                #[inline]
                pub fn $le(&self, at: usize) -> Result<$t, Error> {
                    read(&*self.bytes, at).map(<$t>::from_le_bytes)
                }

                #[doc = concat!("Reads a big-endian `", stringify!($t), "` starting at `at`.")]
                #[inline]
                pub fn $be(&self, at: usize) -> Result<$t, Error> {
                    read(&*self.bytes, at).map(<$t>::from_be_bytes)
                }
            )*
        }
    };
}

macro_rules! impl_setters {
    ($($t:ty => $le:ident, $be:ident;)*) => {
        impl DataViewMut<'_> {
            /// Writes `value` at `at`.
            #[inline]
            pub fn set_u8(&mut self, at: usize, value: u8) -> Result<(), Error> {
                let slot = self.bytes.get_mut(at).ok_or(Error::OutOfBounds)?;
                *slot = value;
                Ok(())
            }

            /// Writes a signed byte at `at`.
            #[inline]
            pub fn set_i8(&mut self, at: usize, value: i8) -> Result<(), Error> {
                self.set_u8(at, value as u8)
            }

            $(
                #[doc = concat!("Writes a little-endian `", stringify!($t), "` starting at `at`.")]
                #[inline]
                pub fn $le(&mut self, at: usize, value: $t) -> Result<(), Error> {
                    write(&mut *self.bytes, at, value.to_le_bytes())
                }

                #[doc = concat!("Writes a big-endian `", stringify!($t), "` starting at `at`.")]
                #[inline]
                pub fn $be(&mut self, at: usize, value: $t) -> Result<(), Error> {
                    write(&mut *self.bytes, at, value.to_be_bytes())
                }
            )*
        }
    };
}

impl_getters! { DataView;
    u16 => get_u16_le, get_u16_be;
    i16 => get_i16_le, get_i16_be;
    u32 => get_u32_le, get_u32_be;
    i32 => get_i32_le, get_i32_be;
    u64 => get_u64_le, get_u64_be;
    i64 => get_i64_le, get_i64_be;
    f32 => get_f32_le, get_f32_be;
    f64 => get_f64_le, get_f64_be;
}

impl_getters! { DataViewMut;
    u16 => get_u16_le, get_u16_be;
    i16 => get_i16_le, get_i16_be;
    u32 => get_u32_le, get_u32_be;
    i32 => get_i32_le, get_i32_be;
    u64 => get_u64_le, get_u64_be;
    i64 => get_i64_le, get_i64_be;
    f32 => get_f32_le, get_f32_be;
    f64 => get_f64_le, get_f64_be;
}

impl_setters! {
    u16 => set_u16_le, set_u16_be;
    i16 => set_i16_le, set_i16_be;
    u32 => set_u32_le, set_u32_be;
    i32 => set_i32_le, set_i32_be;
    u64 => set_u64_le, set_u64_be;
    i64 => set_i64_le, set_i64_be;
    f32 => set_f32_le, set_f32_be;
    f64 => set_f64_le, set_f64_be;
}

impl<'a> DataView<'a> {
    #[inline]
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The bytes covered by this view.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> DataViewMut<'a> {
    #[inline]
    pub(crate) fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    /// The bytes covered by this view.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    /// The bytes covered by this view, mutably.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }

    /// Reborrows as a read-only view.
    #[inline]
    pub fn as_view(&self) -> DataView<'_> {
        DataView::new(&*self.bytes)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowableBuffer};

    #[test]
    fn test_endianness() {
        let b = GrowableBuffer::from([0x01, 0x02, 0x03, 0x04, 0xff]);
        let v = b.data_view(0).unwrap();
        assert_eq!(v.get_u16_le(0), Ok(0x0201));
        assert_eq!(v.get_u16_be(0), Ok(0x0102));
        assert_eq!(v.get_u32_le(0), Ok(0x0403_0201));
        assert_eq!(v.get_u32_be(1), Ok(0x0203_04ff));
        assert_eq!(v.get_i8(4), Ok(-1));
        assert_eq!(v.get_i16_be(3), Ok(0x04ff));
        assert_eq!(v.as_bytes(), &[1, 2, 3, 4, 0xff]);
    }

    #[test]
    fn test_multi_byte_reads_past_end_fail() {
        let b = GrowableBuffer::from([0; 7]);
        let v = b.data_view(0).unwrap();
        assert_eq!(v.get_u64_le(0), Err(Error::OutOfBounds));
        assert_eq!(v.get_u32_be(4), Err(Error::OutOfBounds));
        assert_eq!(v.get_u32_be(3), Ok(0));
        assert_eq!(v.get_u16_le(usize::MAX), Err(Error::OutOfBounds));
    }

    #[test]
    fn test_float_round_trip_through_mut_view() {
        let mut b = GrowableBuffer::from([0; 16]);
        {
            let mut v = b.data_view_mut(0).unwrap();
            v.set_f64_le(0, 1.5).unwrap();
            v.set_f32_be(8, -2.25).unwrap();
            v.set_i32_le(12, -7).unwrap();
            assert_eq!(v.get_f64_le(0), Ok(1.5));
            assert_eq!(v.as_view().get_f32_be(8), Ok(-2.25));
            assert_eq!(v.get_i32_le(12), Ok(-7));
            assert_eq!(v.set_u64_be(9, 1), Err(Error::OutOfBounds));
            assert_eq!(v.set_u16_le(usize::MAX, 1), Err(Error::OutOfBounds));
            v.as_bytes_mut()[15] = 0;
        }
        assert_eq!(&b[12..], &[0xf9, 0xff, 0xff, 0x00]);
    }

    #[test]
    fn test_failed_write_leaves_bytes_untouched() {
        let mut b = GrowableBuffer::from([1, 2, 3]);
        let mut v = b.data_view_mut(1).unwrap();
        assert_eq!(v.set_u32_le(0, u32::MAX), Err(Error::OutOfBounds));
        assert_eq!(v.set_i8(1, -1), Ok(()));
        assert_eq!(b, [1, 2, 255]);
    }
}
