// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Appends `value` if not full; returns [`Error::CapacityExceeded`]
    /// otherwise, leaving the vector unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == N {
            return Err(Error::CapacityExceeded);
        }
        // SAFETY: Just checked that a slot is free.
        unsafe {
            self.push_unchecked(value);
        }
        Ok(())
    }

    /// Appends the value produced by `f`, returning a reference to it.
    ///
    /// The capacity check happens first: when full, `f` is never called and
    /// [`Error::CapacityExceeded`] is returned.
    #[inline]
    pub fn push_with<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T, Error> {
        if self.len == N {
            return Err(Error::CapacityExceeded);
        }
        // SAFETY: Just checked that a slot is free.
        Ok(unsafe { self.push_unchecked(f()) })
    }

    /// Appends `value` if not full; hands `value` back otherwise.
    ///
    /// Returns `None` on success and `Some(value)` when the vector is full,
    /// so a full vector never costs the caller the input. Never fails or
    /// panics.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Option<T> {
        if self.len == N {
            return Some(value);
        }
        unsafe {
            self.push_unchecked(value);
        }
        None
    }

    /// Appends the value produced by `f` and returns a reference to it, or
    /// `None` if the vector is full (in which case `f` is never called).
    #[inline]
    pub fn try_push_with<F: FnOnce() -> T>(&mut self, f: F) -> Option<&mut T> {
        if self.len == N {
            return None;
        }
        Some(unsafe { self.push_unchecked(f()) })
    }

    /// Appends `value` without checking capacity, returning a reference to it.
    ///
    /// # Safety
    ///
    /// The vector must not be full: `self.len() < N` must hold.
    #[inline]
    pub unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < N);
        let len = self.len;
        unsafe {
            // SAFETY: The caller guarantees `len < N`, so the slot exists and
            // is outside the live prefix; writing it cannot overwrite a live
            // element.
            self.buf.get_unchecked_mut(len).write(value);
        }
        self.len = len + 1;
        // SAFETY: The slot at `len` was just initialized.
        unsafe { self.buf.get_unchecked_mut(len).assume_init_mut() }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::InplaceVec;

    #[test]
    fn test_push_with_defers_construction() {
        let mut v: InplaceVec<i32, 1> = InplaceVec::new();
        let r = v.push_with(|| 5).unwrap();
        *r += 1;
        assert_eq!(v.as_slice(), &[6]);

        // Full: the closure must not run.
        let mut called = false;
        let err = v
            .push_with(|| {
                called = true;
                7
            })
            .unwrap_err();
        assert_eq!(err, crate::Error::CapacityExceeded);
        assert!(!called);
        assert_eq!(v.as_slice(), &[6]);
    }

    #[test]
    fn test_try_push_returns_value_when_full() {
        let mut v: InplaceVec<i32, 2> = InplaceVec::new();
        assert_eq!(v.try_push(1), None);
        assert_eq!(v.try_push(2), None);
        assert_eq!(v.try_push(3), Some(3));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_try_push_preserves_non_copy_value() {
        use alloc::string::{String, ToString};

        let mut v: InplaceVec<String, 1> = InplaceVec::new();
        assert!(v.try_push("kept".to_string()).is_none());
        let rejected = v.try_push("given back".to_string());
        assert_eq!(rejected.as_deref(), Some("given back"));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_try_push_with() {
        let mut v: InplaceVec<i32, 1> = InplaceVec::new();
        assert_eq!(v.try_push_with(|| 4).copied(), Some(4));

        let mut called = false;
        assert!(v
            .try_push_with(|| {
                called = true;
                9
            })
            .is_none());
        assert!(!called);
        assert_eq!(v.as_slice(), &[4]);
    }

    #[test]
    fn test_push_unchecked() {
        let mut v: InplaceVec<i32, 3> = InplaceVec::new();
        // SAFETY: three pushes into capacity 3.
        unsafe {
            v.push_unchecked(1);
            v.push_unchecked(2);
            let last = v.push_unchecked(3);
            *last = 30;
        }
        assert_eq!(v.as_slice(), &[1, 2, 30]);
    }
}
