// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`InplaceVec`](crate::InplaceVec).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the initialized prefix `[0..len)`.

// Crate imports
use crate::vec::InplaceVec;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T, const N: usize> Index<usize> for InplaceVec<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

// Read-only ranges
impl<T, const N: usize> Index<Range<usize>> for InplaceVec<T, N> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeFrom<usize>> for InplaceVec<T, N> {
    type Output = [T];
    fn index(&self, r: RangeFrom<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeTo<usize>> for InplaceVec<T, N> {
    type Output = [T];
    fn index(&self, r: RangeTo<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeToInclusive<usize>> for InplaceVec<T, N> {
    type Output = [T];
    fn index(&self, r: RangeToInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeInclusive<usize>> for InplaceVec<T, N> {
    type Output = [T];
    fn index(&self, r: RangeInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T, const N: usize> Index<RangeFull> for InplaceVec<T, N> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        self.as_slice()
    }
}

// Mutable ranges
impl<T, const N: usize> IndexMut<usize> for InplaceVec<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
impl<T, const N: usize> IndexMut<Range<usize>> for InplaceVec<T, N> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeFrom<usize>> for InplaceVec<T, N> {
    fn index_mut(&mut self, r: RangeFrom<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeTo<usize>> for InplaceVec<T, N> {
    fn index_mut(&mut self, r: RangeTo<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeToInclusive<usize>> for InplaceVec<T, N> {
    fn index_mut(&mut self, r: RangeToInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeInclusive<usize>> for InplaceVec<T, N> {
    fn index_mut(&mut self, r: RangeInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T, const N: usize> IndexMut<RangeFull> for InplaceVec<T, N> {
    fn index_mut(&mut self, _: RangeFull) -> &mut Self::Output {
        self.as_mut_slice()
    }
}
