// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

// Core imports
use core::ptr;

impl<T, const N: usize> InplaceVec<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)`.
    ///
    /// Returns [`Error::OutOfRange`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfRange);
        }

        let tail_len = len - at;
        let mut other: InplaceVec<T, N> = InplaceVec::new();

        // Shrink first: ownership of the tail slots transfers wholesale.
        self.len = at;
        unsafe {
            // SAFETY: `buf[at..len]` held valid elements that `self.len` no
            // longer covers, so moving them into `other` is the sole transfer;
            // `tail_len <= N` so they fit in the fresh buffer.
            ptr::copy_nonoverlapping(
                (self.buf.as_ptr() as *const T).add(at),
                other.buf.as_mut_ptr() as *mut T,
                tail_len,
            );
        }
        other.len = tail_len;

        Ok(other)
    }
}
