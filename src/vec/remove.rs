// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InplaceVec;

// Core imports
use core::ptr;

impl<T, const N: usize> InplaceVec<T, N> {
    /// Removes and returns the element at `index`, shifting subsequent
    /// elements left to close the gap.
    ///
    /// Returns `None` if `index >= len`. After a successful call, `index`
    /// addresses the element that previously followed the removed one (or is
    /// the end position if the last element was removed).
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;

        unsafe {
            // SAFETY: `index < len`, so the slot holds a valid `T`; reading it
            // takes ownership, and the overlapping copy moves the tail down
            // over the vacated slot before `len` shrinks.
            let p = self.as_mut_ptr().add(index);
            let out = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            Some(out)
        }
    }

    /// Removes and returns the element at `index` by swapping in the last
    /// element.
    ///
    /// O(1), but does not preserve order. Returns `None` when `index >= len`.
    /// Removing the last element avoids the swap.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;

        unsafe {
            // SAFETY: Before the decrement, `index < old_len`, so `buf[index]`
            // holds a valid `T`. The last live slot (now outside `len`) is
            // moved into the hole, so neither value is dropped twice.
            let base = self.buf.as_mut_ptr() as *mut T;
            let out = ptr::read(base.add(index));
            if index != last {
                ptr::copy_nonoverlapping(base.add(last), base.add(index), 1);
            }
            Some(out)
        }
    }
}
