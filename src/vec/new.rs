// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Constructs an empty vector. No slot is initialized.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a vector holding `len` default-valued elements.
    ///
    /// Returns [`Error::CapacityExceeded`] if `len > N`.
    pub fn with_len(len: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        if len > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        for _ in 0..len {
            // Cannot overflow: len <= N.
            unsafe {
                v.push_unchecked(T::default());
            }
        }
        Ok(v)
    }

    /// Constructs a vector holding `count` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`.
    pub fn from_elem(value: T, count: usize) -> Result<Self, Error>
    where
        T: Clone,
    {
        if count > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        for _ in 0..count {
            unsafe {
                v.push_unchecked(value.clone());
            }
        }
        Ok(v)
    }

    /// Constructs a vector from an array of any length `M <= N`, moving the
    /// elements in.
    ///
    /// Returns [`Error::CapacityExceeded`] if `M > N`. For `M == N`, the
    /// infallible [`From<[T; N]>`](Self::from) impl also applies.
    pub fn from_array<const M: usize>(src: [T; M]) -> Result<Self, Error> {
        if M > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        for item in src {
            unsafe {
                v.push_unchecked(item);
            }
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::InplaceVec;

    #[test]
    fn test_with_len_fills_defaults() {
        let v = InplaceVec::<i32, 5>::with_len(3).unwrap();
        assert_eq!(v.as_slice(), &[0, 0, 0]);

        let err = InplaceVec::<i32, 2>::with_len(3).unwrap_err();
        assert_eq!(err, crate::Error::CapacityExceeded);
    }

    #[test]
    fn test_from_elem() {
        // assign-style construction: 3 copies of 9 in any capacity >= 3
        let v = InplaceVec::<i32, 4>::from_elem(9, 3).unwrap();
        assert_eq!(v.as_slice(), &[9, 9, 9]);
        assert_eq!(v.len(), 3);

        let err = InplaceVec::<i32, 2>::from_elem(9, 3).unwrap_err();
        assert_eq!(err, crate::Error::CapacityExceeded);
    }

    #[test]
    fn test_from_array_shorter_than_capacity() {
        let v = InplaceVec::<i32, 5>::from_array([1, 2, 3]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert!(!v.is_full());

        let err = InplaceVec::<i32, 2>::from_array([1, 2, 3]).unwrap_err();
        assert_eq!(err, crate::Error::CapacityExceeded);
    }

    #[test]
    fn test_from_array_moves_non_clone_values() {
        struct Opaque(#[allow(dead_code)] u8);
        let v = InplaceVec::<Opaque, 4>::from_array([Opaque(1), Opaque(2)]).unwrap();
        assert_eq!(v.len(), 2);
    }
}
