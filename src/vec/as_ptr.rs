// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InplaceVec;

impl<T, const N: usize> InplaceVec<T, N> {
    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized as `T`. Code that
    /// dereferences this pointer must treat `self.len()` as the number of
    /// initialized elements and must not read from `ptr.add(i)` for any
    /// `i >= self.len()`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized as `T`. Writing beyond
    /// `len` through this pointer does not update `len` and does not make the
    /// written slots part of the logical contents; reading beyond `len` is
    /// undefined behavior.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }
}
