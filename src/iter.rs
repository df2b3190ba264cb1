// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`InplaceVec`](crate::InplaceVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&InplaceVec` and `&mut InplaceVec` iterate as slices.
//! - `FromIterator` collects at most `N` elements and discards the rest.

// Crate imports
use crate::vec::InplaceVec;

// Core imports
use core::{
    iter::FusedIterator,
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};

/// Owned iterator returned by `InplaceVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yielded before the
/// iterator is dropped are dropped with it.
pub struct IntoIter<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    front: usize,
    back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded, in order.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots in `buf[front..back]` are initialized and owned by the
        // iterator; `next`/`next_back` shrink the window as elements move out.
        unsafe {
            core::slice::from_raw_parts(
                (self.buf.as_ptr() as *const T).add(self.front),
                self.back - self.front,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside the live window, so the slot holds a
            // valid `T`; advancing `front` first means it is read exactly once.
            Some(unsafe { self.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    // `nth` is deliberately not overridden: the default (repeated `next`)
    // drops the skipped elements, which a window-jump would leak.
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` now names the last live slot; shrinking the
            // window first means it is read exactly once.
            Some(unsafe { self.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let rem = self.back - self.front;
        // SAFETY: `buf[front..back]` still holds valid elements that nothing
        // else owns; dropping them in place here is the sole cleanup.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                (self.buf.as_mut_ptr() as *mut T).add(self.front),
                rem,
            ));
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a InplaceVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut InplaceVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for InplaceVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        // Ownership of the buffer transfers to the iterator; the vector's own
        // `Drop` must not run on the moved-out elements.
        let this = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: `this` is never used again and never dropped, so the
            // bitwise copy of the buffer is the sole owner of its elements.
            buf: unsafe { ptr::read(&this.buf) },
            front: 0,
            back: this.len,
        }
    }
}

impl<T, const N: usize> FromIterator<T> for InplaceVec<T, N> {
    /// Collects at most `N` elements; any excess is left unconsumed in the
    /// source iterator and discarded with it.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::default();
        v.extend(iter);
        v
    }
}
