// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

impl<T, const N: usize> Extend<T> for InplaceVec<T, N> {
    /// Appends from `iter`, silently stopping at capacity.
    ///
    /// Takes at most `spare_capacity()` elements and does not consume any
    /// further elements from the iterator.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let _ = self.extend_until_full(iter);
    }
}

impl<T, const N: usize> InplaceVec<T, N> {
    /// Appends clones of `src` if they all fit; otherwise no-op and returns
    /// [`Error::CapacityExceeded`].
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > N - self.len {
            return Err(Error::CapacityExceeded);
        }
        for item in src {
            // Cannot overflow: checked against the spare capacity above.
            unsafe {
                self.push_unchecked(item.clone());
            }
        }
        Ok(())
    }

    /// Appends every element of `iter`, all-or-nothing.
    ///
    /// - If the iterator yields at most `spare_capacity()` elements, they are
    ///   appended in order and `Ok(())` is returned.
    /// - If it yields more, this returns [`Error::CapacityExceeded`] and
    ///   `self` is left unchanged (elements staged so far are dropped; the
    ///   source may be partially consumed).
    #[inline]
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) -> Result<(), Error> {
        let spare = N - self.len;

        // Stage in a scratch vector so `self` is unchanged on error.
        let mut staged: Self = Self::new();
        for item in iter {
            if staged.len == spare {
                return Err(Error::CapacityExceeded);
            }
            unsafe {
                staged.push_unchecked(item);
            }
        }
        self.splice_from(self.len, staged);
        Ok(())
    }

    /// Appends elements from `iter` until the vector is full or the source is
    /// exhausted, whichever comes first. Never fails.
    ///
    /// Returns the iterator positioned at the first unconsumed element, so
    /// the caller can route the overflow elsewhere:
    ///
    /// ```
    /// # use inplace_vec::InplaceVec;
    /// let mut v: InplaceVec<i32, 3> = InplaceVec::new();
    /// let mut rest = v.extend_until_full([1, 2, 3, 4, 5]);
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// assert_eq!(rest.next(), Some(4));
    /// ```
    pub fn extend_until_full<I: IntoIterator<Item = T>>(&mut self, iter: I) -> I::IntoIter {
        let mut it = iter.into_iter();
        while self.len < N {
            match it.next() {
                Some(item) => {
                    unsafe {
                        self.push_unchecked(item);
                    }
                }
                None => break,
            }
        }
        it
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::InplaceVec;

    #[test]
    fn test_extend_from_slice_fills_to_exact_capacity() {
        let mut v: InplaceVec<u8, 5> = InplaceVec::new();
        assert_eq!(v.extend_from_slice(&[1, 2, 3]), Ok(()));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        // Reaching N exactly is allowed; only exceeding it is refused.
        assert_eq!(v.extend_from_slice(&[4, 5]), Ok(()));
        assert!(v.is_full());
        assert_eq!(v.extend_from_slice(&[6]), Err(crate::Error::CapacityExceeded));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_extend_from_slice_err_is_noop() {
        let mut v: InplaceVec<i32, 3> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        let res = v.extend_from_slice(&[3, 4]); // needs 2, spare 1
        assert_eq!(res, Err(crate::Error::CapacityExceeded));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_try_extend_from_iter_all_or_nothing() {
        let mut v: InplaceVec<i32, 5> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        v.try_extend_from_iter([3, 4]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);

        let mut w: InplaceVec<i32, 4> = InplaceVec::try_from(&[10, 20][..]).unwrap();
        let err = w.try_extend_from_iter([30, 40, 50]).unwrap_err();
        assert_eq!(err, crate::Error::CapacityExceeded);
        assert_eq!(w.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_try_extend_from_iter_to_exact_capacity() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        v.try_extend_from_iter([3, 4]).unwrap();
        assert!(v.is_full());
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);

        // Full vector: any element at all is an overflow.
        let err = v.try_extend_from_iter([5]).unwrap_err();
        assert_eq!(err, crate::Error::CapacityExceeded);
        // An empty source is fine.
        v.try_extend_from_iter(core::iter::empty()).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_extend_until_full_returns_remainder() {
        let mut v: InplaceVec<i32, 3> = InplaceVec::try_from(&[1][..]).unwrap();
        let mut rest = v.extend_until_full([2, 3, 4, 5]);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert!(v.is_full());
        assert_eq!(rest.next(), Some(4));
        assert_eq!(rest.next(), Some(5));
        assert_eq!(rest.next(), None);
    }

    #[test]
    fn test_extend_until_full_consumes_everything_that_fits() {
        let mut v: InplaceVec<i32, 5> = InplaceVec::new();
        let mut rest = v.extend_until_full([1, 2, 3]);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(rest.next(), None);
    }

    #[test]
    fn test_extend_trait_truncates() {
        let mut v: InplaceVec<i32, 3> = InplaceVec::new();
        v.extend([1, 2, 3, 4, 5]);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert!(v.is_full());
    }

    #[test]
    fn test_extend_does_not_overconsume() {
        struct ExtendTestIter {
            remaining: usize,
            next_calls: usize,
        }

        impl Iterator for ExtendTestIter {
            type Item = u8;
            fn next(&mut self) -> Option<u8> {
                if self.remaining == 0 {
                    return None;
                }
                self.remaining -= 1;
                self.next_calls += 1;
                Some(1)
            }
        }
        let mut it = ExtendTestIter {
            remaining: 10,
            next_calls: 0,
        };
        let mut vec: InplaceVec<u8, 4> = InplaceVec::new();

        // &mut it implements IntoIterator via &mut Iterator
        vec.extend(&mut it);

        assert_eq!(vec.len(), 4);
        assert_eq!(it.next_calls, 4); // must not be 5
    }

    #[test]
    fn test_extend_with_empty_input_is_noop() {
        let mut v: InplaceVec<i32, 3> = InplaceVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v.extend_from_slice(&[]), Ok(()));
        assert_eq!(v.as_slice(), &[1, 2]);
    }
}
