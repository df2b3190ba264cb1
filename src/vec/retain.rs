// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InplaceVec;

// Core imports
use core::{mem, ptr};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Retains only the elements for which `f` returns `true`, preserving
    /// order and dropping the rest.
    ///
    /// The predicate runs once per element in iteration order. If it panics,
    /// elements not yet processed leak (they are never dropped twice).
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        // Logical ownership moves out of the vector up front; on a predicate
        // panic the remaining slots are simply forgotten.
        let len = mem::replace(&mut self.len, 0);
        let base = self.buf.as_mut_ptr() as *mut T;
        let mut write = 0;
        for read in 0..len {
            // SAFETY: `read < len` (the old length), so the slot holds a valid
            // `T`; the read takes ownership and the slot is never touched as a
            // live value again unless explicitly written below.
            let v = unsafe { ptr::read(base.add(read)) };
            if f(&v) {
                if write != read {
                    // SAFETY: `write < read < len`; the target slot's previous
                    // value was already moved out or dropped. `ptr::write`
                    // consumes `v` without dropping it.
                    unsafe { ptr::write(base.add(write), v) };
                } else {
                    // Already in place; just avoid dropping the local copy.
                    mem::forget(v);
                }
                write += 1;
            }
            // Rejected values drop here.
        }
        self.len = write;
    }
}
