// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{iter::IntoIter, vec::InplaceVec};

// Core imports
use core::{
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
    ptr,
};

/// Owned iterator returned by `InplaceVec::drain`.
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Internally wraps an `IntoIter` over a scratch `InplaceVec` holding the
///   drained elements, so dropping the iterator early drops whatever was not
///   yielded.
pub struct Drain<'a, T, const N: usize> {
    pub(crate) _parent: &'a mut InplaceVec<T, N>,
    pub(crate) iter: IntoIter<T, N>,
}

impl<'a, T, const N: usize> Iterator for Drain<'a, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
impl<'a, T, const N: usize> DoubleEndedIterator for Drain<'a, T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}
impl<'a, T, const N: usize> ExactSizeIterator for Drain<'a, T, N> {}
impl<'a, T, const N: usize> FusedIterator for Drain<'a, T, N> {}

impl<T, const N: usize> InplaceVec<T, N> {
    /// Removes the specified range of elements and returns them as an
    /// iterator.
    ///
    /// Elements in `range` are moved out and yielded by value; the remainder
    /// of the vector is shifted left to close the gap. The removal happens
    /// immediately, before the iterator is consumed.
    ///
    /// This matches the behavior of `Vec::drain`.
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves the
    /// vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use inplace_vec::InplaceVec;
    /// let mut v: InplaceVec<_, 5> = [1, 2, 3, 4, 5].into();
    /// let drained: InplaceVec<_, 5> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4, 5]);
    /// ```
    pub fn drain<R>(
        &mut self,
        range: R,
    ) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + FusedIterator + '_
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i + 1,
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("drain range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("drain range end {} exceeds length {}", end, len);
        }

        let mut drained: InplaceVec<T, N> = InplaceVec::new();
        if start < end {
            let count = end - start;
            unsafe {
                // SAFETY: `start < end <= len`, so `buf[start..end]` holds
                // valid elements. They are moved wholesale into the scratch
                // vector (sole ownership transfers), the tail is shifted down
                // with an overlap-safe copy, and `len` shrinks to exclude the
                // vacated slots before anyone can observe them.
                let base = self.buf.as_mut_ptr() as *mut T;
                ptr::copy_nonoverlapping(
                    base.add(start),
                    drained.buf.as_mut_ptr() as *mut T,
                    count,
                );
                drained.len = count;
                ptr::copy(base.add(end), base.add(start), len - end);
            }
            self.len = len - count;
        }

        Drain {
            _parent: self,
            iter: drained.into_iter(),
        }
    }
}
