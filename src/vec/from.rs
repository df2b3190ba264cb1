// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InplaceVec;

impl<T, const N: usize> From<[T; N]> for InplaceVec<T, N> {
    /// Moves a full-capacity array in; the result has `len == N`.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::default();
        for item in src {
            // Exactly N pushes into capacity N.
            unsafe {
                v.push_unchecked(item);
            }
        }
        v
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for InplaceVec<T, N> {
    fn from(src: &[T; N]) -> Self {
        let mut v = Self::default();
        for item in src {
            unsafe {
                v.push_unchecked(item.clone());
            }
        }
        v
    }
}
