// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowableBuffer`](crate::GrowableBuffer).
//!
//! - **Serialize**: the logical bytes, as a byte string (`serialize_bytes`).
//!   Formats without a native byte type (e.g. JSON) render this as a sequence
//!   of numbers. Spare capacity and the growth factor are not serialized.
//! - **Deserialize**: from a byte string or any sequence of `u8`. The result
//!   is a tight buffer (`capacity == len`) with the default growth factor.

// Crate imports
use crate::buf::GrowableBuffer;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::fmt;

// External imports - serde
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for GrowableBuffer {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bytes(self.as_slice())
    }
}

struct BufferVisitor;

impl<'de> de::Visitor<'de> for BufferVisitor {
    type Value = GrowableBuffer;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a byte string or sequence of bytes")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(GrowableBuffer::from(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(GrowableBuffer::from(v))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Vec::with_capacity(a.size_hint().unwrap_or(0).min(4096));
        while let Some(byte) = a.next_element::<u8>()? {
            out.push(byte);
        }
        Ok(GrowableBuffer::from(out))
    }
}

impl<'de> Deserialize<'de> for GrowableBuffer {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_byte_buf(BufferVisitor)
    }
}
