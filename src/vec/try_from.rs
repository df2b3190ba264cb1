// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

impl<T: Clone, const N: usize> TryFrom<&[T]> for InplaceVec<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::default();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}
