// This file is part of growable-buffer.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buf::GrowableBuffer;

impl GrowableBuffer {
    /// Returns the byte at `index` if `index < len`, otherwise `None`.
    ///
    /// Bytes past the logical end are never reported, even when they are
    /// inside the store.
    #[inline]
    pub fn get_element(&self, index: usize) -> Option<u8> {
        self.as_slice().get(index).copied()
    }

    /// Writes `value` at `index` if `index < len`.
    ///
    /// At or past the logical end nothing is written and the value is handed
    /// back as `Err(value)`. The length never changes.
    #[inline]
    pub fn set_element(&mut self, index: usize, value: u8) -> Result<(), u8> {
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(value),
        }
    }
}
