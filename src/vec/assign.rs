// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Replaces the contents with `count` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`; the previous
    /// contents are untouched on error.
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if count > N {
            return Err(Error::CapacityExceeded);
        }
        self.clear();
        for _ in 0..count {
            unsafe {
                self.push_unchecked(value.clone());
            }
        }
        Ok(())
    }

    /// Replaces the contents with clones of `src`, in order.
    ///
    /// Returns [`Error::CapacityExceeded`] if `src.len() > N`; the previous
    /// contents are untouched on error. Literal lists assign through this
    /// form, since arrays coerce to slices.
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > N {
            return Err(Error::CapacityExceeded);
        }
        self.clear();
        for item in src {
            unsafe {
                self.push_unchecked(item.clone());
            }
        }
        Ok(())
    }

    /// Replaces the contents with the elements of `iter`, in order.
    ///
    /// The new contents are staged first, so an iterator that yields more
    /// than `N` elements returns [`Error::CapacityExceeded`] with the
    /// previous contents intact (the source may be partially consumed).
    pub fn assign_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let mut staged: Self = Self::new();
        for item in iter {
            if staged.len == N {
                return Err(Error::CapacityExceeded);
            }
            unsafe {
                staged.push_unchecked(item);
            }
        }
        *self = staged;
        Ok(())
    }
}
