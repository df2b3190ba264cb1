// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InplaceVec;

impl<T, const N: usize> InplaceVec<T, N> {
    /// Tries to construct from an iterator, erroring with
    /// [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) if it would
    /// overflow.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns an
    ///   error; elements pushed before the overflow are dropped.
    /// - The source iterator may be left partially consumed (it stops at the
    ///   first overflow).
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, crate::Error> {
        let mut v = Self::default();
        for item in iter {
            v.push(item)?;
        }
        Ok(v)
    }
}
