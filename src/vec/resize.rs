// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Resizes to `new_len`, filling with clones of `value` when growing and
    /// dropping the tail when shrinking.
    ///
    /// Returns [`Error::CapacityExceeded`] if `new_len > N`, leaving the
    /// vector unchanged. `new_len == len` is a no-op.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone())
    }

    /// Resizes to `new_len`, filling with values produced by `f` when growing.
    ///
    /// Same error semantics as [`resize`](Self::resize); `f` is never called
    /// when the request is refused or shrinks the vector.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) -> Result<(), Error> {
        if new_len > N {
            return Err(Error::CapacityExceeded);
        }
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        while self.len < new_len {
            // Cannot overflow: new_len <= N.
            unsafe {
                self.push_unchecked(f());
            }
        }
        Ok(())
    }
}
