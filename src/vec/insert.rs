// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Inserts `value` at `index`, shifting elements at and after it right.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`.
    /// - Returns [`Error::CapacityExceeded`] if at capacity.
    ///
    /// Cost is proportional to `len - index`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        if self.len == N {
            return Err(Error::CapacityExceeded);
        }
        let len = self.len;

        unsafe {
            // SAFETY: `index <= len < N`, so both the shifted range and the
            // destination slot lie inside the buffer. `ptr::copy` handles the
            // overlap; the vacated slot at `index` is then written exactly once.
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p, p.add(1), len - index);
            ptr::write(p, value);
        }

        self.len = len + 1;
        Ok(())
    }

    /// Inserts the value produced by `f` at `index`.
    ///
    /// Bounds and capacity are validated first: on error, `f` is never called.
    #[inline]
    pub fn insert_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        if self.len == N {
            return Err(Error::CapacityExceeded);
        }
        self.insert(index, f())
    }

    /// Inserts `count` clones of `value` at `index`, shifting the tail right.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`.
    /// - Returns [`Error::CapacityExceeded`] if `len + count > N`.
    ///
    /// On any error, including a panicking `T::clone`, previously live
    /// elements are untouched: the clones are staged in a temporary vector
    /// and spliced in only once all of them exist.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        if count > N - self.len {
            return Err(Error::CapacityExceeded);
        }
        let mut staged: Self = Self::new();
        for _ in 0..count {
            // Cannot overflow: count <= N - len <= N.
            unsafe {
                staged.push_unchecked(value.clone());
            }
        }
        self.splice_from(index, staged);
        Ok(())
    }

    /// Inserts clones of `src` at `index` in order, shifting the tail right.
    ///
    /// Same error and staging semantics as [`insert_n`](Self::insert_n).
    /// Literal lists insert through this form, since arrays coerce to slices.
    pub fn insert_slice(&mut self, index: usize, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        if src.len() > N - self.len {
            return Err(Error::CapacityExceeded);
        }
        let mut staged: Self = Self::new();
        for item in src {
            unsafe {
                staged.push_unchecked(item.clone());
            }
        }
        self.splice_from(index, staged);
        Ok(())
    }

    /// Inserts every element of `iter` at `index` in order, shifting the tail
    /// right.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`.
    /// - Returns [`Error::CapacityExceeded`] if the iterator yields more than
    ///   `N - len` elements; the vector is unchanged and any staged elements
    ///   are dropped. The source may be left partially consumed on error.
    pub fn insert_from_iter<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        let spare = N - self.len;
        let mut staged: Self = Self::new();
        for item in iter {
            if staged.len == spare {
                return Err(Error::CapacityExceeded);
            }
            unsafe {
                staged.push_unchecked(item);
            }
        }
        self.splice_from(index, staged);
        Ok(())
    }

    /// Moves every element of `src` into the gap opened at `index`.
    ///
    /// Caller must have validated `index <= len` and `src.len() <= N - len`.
    pub(crate) fn splice_from(&mut self, index: usize, src: Self) {
        let count = src.len;
        if count == 0 {
            return;
        }
        let len = self.len;
        let src = ManuallyDrop::new(src);
        unsafe {
            // SAFETY: `index <= len` and `len + count <= N` per the caller's
            // validation, so the shifted tail and the gap stay in bounds. The
            // source's elements are moved out exactly once; wrapping it in
            // `ManuallyDrop` stops its destructor from dropping them again.
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p, p.add(count), len - index);
            ptr::copy_nonoverlapping(src.buf.as_ptr() as *const T, p, count);
        }
        self.len = len + count;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::InplaceVec;

    #[test]
    fn test_insert_at_bounds_and_shift_correctly() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::new();
        v.insert(0, 1).unwrap(); // insert at front into empty
        v.insert(1, 3).unwrap(); // tail
        v.insert(1, 2).unwrap(); // middle, shifts right
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.insert(3, 4).unwrap(); // exactly at len
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(v.insert(0, 9), Err(crate::Error::CapacityExceeded)); // full
    }

    #[test]
    fn test_insert_preserves_prefix_and_suffix_order() {
        let mut v: InplaceVec<i32, 6> = InplaceVec::from_array([1, 2, 4, 5]).unwrap();
        v.insert(2, 3).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_err_is_noop() {
        let mut v: InplaceVec<i32, 2> = InplaceVec::try_from(&[10, 20][..]).unwrap();
        assert_eq!(v.insert(3, 99), Err(crate::Error::OutOfRange));
        assert_eq!(v.as_slice(), &[10, 20]);
        assert_eq!(v.insert(0, 1), Err(crate::Error::CapacityExceeded));
        assert_eq!(v.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_insert_with_defers_construction() {
        let mut v: InplaceVec<i32, 2> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        let mut called = false;
        let err = v
            .insert_with(1, || {
                called = true;
                9
            })
            .unwrap_err();
        assert_eq!(err, crate::Error::CapacityExceeded);
        assert!(!called);

        let mut w: InplaceVec<i32, 3> = InplaceVec::try_from(&[1, 3][..]).unwrap();
        w.insert_with(1, || 2).unwrap();
        assert_eq!(w.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_insert_n_fills_and_shifts() {
        let mut v: InplaceVec<i32, 8> = InplaceVec::from_array([1, 2, 3]).unwrap();
        v.insert_n(1, 3, 9).unwrap();
        assert_eq!(v.as_slice(), &[1, 9, 9, 9, 2, 3]);

        // Filling to exactly N must succeed.
        v.insert_n(6, 2, 7).unwrap();
        assert_eq!(v.as_slice(), &[1, 9, 9, 9, 2, 3, 7, 7]);
        assert!(v.is_full());

        // One past N must refuse without mutation.
        assert_eq!(v.insert_n(0, 1, 0), Err(crate::Error::CapacityExceeded));
        assert_eq!(v.len(), 8);
    }

    #[test]
    fn test_insert_slice_and_literal_list() {
        let mut v: InplaceVec<i32, 8> = InplaceVec::from_array([0, 4]).unwrap();
        v.insert_slice(1, &[1, 2, 3]).unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);

        // Arrays coerce: this is the "literal list" form.
        v.insert_slice(5, &[5, 6]).unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);

        assert_eq!(
            v.insert_slice(0, &[9, 9]),
            Err(crate::Error::CapacityExceeded)
        );
        assert_eq!(v.len(), 7);
        assert_eq!(v.insert_slice(8, &[9]), Err(crate::Error::OutOfRange));
    }

    #[test]
    fn test_insert_slice_to_exact_capacity() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::from_array([1, 4]).unwrap();
        v.insert_slice(1, &[2, 3]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert!(v.is_full());
    }

    #[test]
    fn test_insert_from_iter() {
        let mut v: InplaceVec<i32, 6> = InplaceVec::from_array([1, 5]).unwrap();
        v.insert_from_iter(1, [2, 3, 4]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);

        let err = v.insert_from_iter(0, [8, 9]).unwrap_err();
        assert_eq!(err, crate::Error::CapacityExceeded);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_from_iter_moves_non_clone_values() {
        struct Opaque(u8);
        let mut v: InplaceVec<Opaque, 4> = InplaceVec::new();
        v.push(Opaque(0)).unwrap();
        v.push(Opaque(3)).unwrap();
        v.insert_from_iter(1, [Opaque(1), Opaque(2)]).unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v[1].0, 1);
        assert_eq!(v[3].0, 3);
    }

    #[test]
    fn test_insert_empty_bulk_forms_are_noops() {
        let mut v: InplaceVec<i32, 3> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        v.insert_slice(1, &[]).unwrap();
        v.insert_n(0, 0, 9).unwrap();
        v.insert_from_iter(2, core::iter::empty()).unwrap();
        assert_eq!(v.as_slice(), &[1, 2]);
    }
}
