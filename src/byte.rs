// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Coercion of numeric values into single bytes.
//!
//! Elements of a [`GrowableBuffer`](crate::GrowableBuffer) are unsigned 8-bit
//! values. Constructors such as
//! [`from_values`](crate::GrowableBuffer::from_values) and transforms such as
//! [`map`](crate::GrowableBuffer::map) accept any [`IntoByte`] value and store
//! it modulo 256:
//!
//! - integers keep their low 8 bits (`256 -> 0`, `-1 -> 255`);
//! - `bool` becomes `0` or `1`;
//! - floats are truncated toward zero and then wrapped; NaN and infinities
//!   become `0`.

/// Converts a value into a byte, wrapping modulo 256.
pub trait IntoByte {
    /// Returns the byte this value is stored as.
    fn into_byte(self) -> u8;
}

macro_rules! impl_into_byte_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoByte for $t {
                #[inline]
                fn into_byte(self) -> u8 {
                    self as u8
                }
            }
        )*
    };
}

impl_into_byte_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl IntoByte for bool {
    #[inline]
    fn into_byte(self) -> u8 {
        u8::from(self)
    }
}

impl IntoByte for f64 {
    #[inline]
    fn into_byte(self) -> u8 {
        // Beyond 2^64 every finite float is a multiple of 256.
        const LIMIT: f64 = 18_446_744_073_709_551_616.0;
        if !self.is_finite() || self >= LIMIT || self <= -LIMIT {
            return 0;
        }
        (self as i128) as u8
    }
}

impl IntoByte for f32 {
    #[inline]
    fn into_byte(self) -> u8 {
        f64::from(self).into_byte()
    }
}

impl<T: IntoByte + Copy> IntoByte for &T {
    #[inline]
    fn into_byte(self) -> u8 {
        (*self).into_byte()
    }
}
