// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InplaceVec;

impl<T, const N: usize> InplaceVec<T, N> {
    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]`
            // are initialized by invariant, so the old last slot holds a valid
            // `T`; `len` no longer covers it, so this read takes sole
            // ownership and the slot will not be dropped again.
            let out = unsafe { self.buf[self.len].assume_init_read() };
            Some(out)
        }
    }
}
