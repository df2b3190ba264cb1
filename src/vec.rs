// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `InplaceVec` type and its inherent API.
//!
//! `InplaceVec<T, N>` is a fixed-capacity vector with inline storage and
//! in-place element lifetimes. It stores elements in a fixed-size backing
//! buffer of `MaybeUninit<T>` slots and tracks a logical length. Methods
//! generally mirror slice/vector semantics, with explicit capacity checks and
//! fallible variants where appropriate.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= N` always holds, including across panics in user code.
// - Elements in `buf[..len]` are initialized `T` values owned by the vector.
// - Elements in `buf[len..N]` are logically uninitialized and must never be
//   read or dropped as `T`.
// - Fallible operations validate capacity/bounds before mutating any slot.
// - All public methods maintain these invariants.

mod as_ptr;
mod assign;
mod default;
mod drain;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod retain;
mod slice;
mod split_off;
mod try_from;
mod try_from_iter;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
    ptr,
};

/// A fixed-capacity vector with inline storage.
///
/// `InplaceVec<T, N>` stores its elements inline in a buffer of capacity `N`
/// and tracks a logical length `len ∈ 0..=N`. Conceptually, it is a slice-like
/// view into a fixed-capacity backing array:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - the buffer is stored inline (typically on the stack);
/// - elements may be any `T` — they are constructed in place when pushed or
///   inserted and destroyed in place when popped, erased, or truncated;
/// - many methods mirror `Vec`/slice semantics where they make sense;
/// - no heap allocations are performed.
///
/// # Layout and invariants
///
/// Internally, `InplaceVec<T, N>` maintains:
///
/// - a backing buffer `[MaybeUninit<T>; N]`; and
/// - a logical length `len` with `0 <= len <= N`.
///
/// Only the prefix `buf[..len]` holds live values and is visible through safe
/// APIs. Methods such as [`as_slice`], [`as_mut_slice`], indexing, and
/// iteration are all restricted to this prefix. Dropping the vector drops
/// exactly the live prefix.
///
/// # Capacity errors
///
/// Operations whose resulting length would exceed `N` return
/// [`Error::CapacityExceeded`] *before* mutating anything, so a failed call
/// leaves the vector observably unchanged. Checked element access past `len`
/// returns [`Error::OutOfRange`]. See the [crate docs](crate) for the
/// fallible / try / unchecked tiers.
///
/// # Complexity characteristics
///
/// - The type size is roughly `N * size_of::<T>() + O(1)`; moving an
///   `InplaceVec<T, N>` moves the whole buffer, `O(N)` in the capacity, so
///   pass it by reference in hot code.
/// - `push`, `pop`, and the unchecked variants are `O(1)`.
/// - `insert`, `remove`, and `drain` shift the tail: cost is proportional to
///   the number of elements at and after the position, not to `N`.
/// - [`capacity`], [`reserve`], and [`shrink_to_fit`] never allocate or move
///   anything; the latter two exist for drop-in compatibility with growable
///   vectors and only validate their argument (or do nothing).
///
/// # Examples
///
/// ```rust
/// use inplace_vec::InplaceVec;
///
/// let mut v: InplaceVec<String, 3> = InplaceVec::new();
/// v.push("a".to_string()).unwrap();
/// v.push("b".to_string()).unwrap();
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.pop().as_deref(), Some("b"));
/// ```
///
/// [`as_slice`]: InplaceVec::as_slice
/// [`as_mut_slice`]: InplaceVec::as_mut_slice
/// [`capacity`]: InplaceVec::capacity
/// [`reserve`]: InplaceVec::reserve
/// [`shrink_to_fit`]: InplaceVec::shrink_to_fit
pub struct InplaceVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> InplaceVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the largest length this vector can ever have.
    ///
    /// Equivalent to [`capacity`](Self::capacity); the bound never varies.
    #[inline]
    pub const fn max_len(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Validates that `requested` elements fit; storage is already reserved.
    ///
    /// Returns [`Error::CapacityExceeded`] if `requested > N`, otherwise does
    /// nothing. Never changes observable state.
    #[inline]
    pub fn reserve(&mut self, requested: usize) -> Result<(), Error> {
        if requested > N {
            return Err(Error::CapacityExceeded);
        }
        Ok(())
    }

    /// Does nothing; the backing storage is part of the value and cannot shrink.
    #[inline]
    pub fn shrink_to_fit(&mut self) {}

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        (i < self.len).then(|| &self.as_slice()[i])
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        (i < self.len).then(|| &mut self.as_mut_slice()[i])
    }

    /// Checked access: the element at `index`, or [`Error::OutOfRange`].
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::OutOfRange)
    }

    /// Checked mutable access: the element at `index`, or [`Error::OutOfRange`].
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.get_mut(index).ok_or(Error::OutOfRange)
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()` must hold.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: The caller guarantees `index < len`, so the slot is within
        // the initialized prefix and holds a valid `T`.
        unsafe { self.buf.get_unchecked(index).assume_init_ref() }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()` must hold.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: The caller guarantees `index < len`, so the slot is within
        // the initialized prefix and holds a valid `T`.
        unsafe { self.buf.get_unchecked_mut(index).assume_init_mut() }
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }
}

impl<T, const N: usize> InplaceVec<T, N> {
    /// Drops all live elements and sets `len` to 0. Never fails.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shrinks to `new_len` if `new_len < len`, dropping the tail; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        // Shrink first so a panicking destructor cannot lead to a double drop.
        self.len = new_len;
        let base = self.buf.as_mut_ptr() as *mut T;
        unsafe {
            // SAFETY: `buf[new_len..old_len]` was the live tail; `len` no
            // longer covers it, so dropping each value here is the sole drop.
            let tail = ptr::slice_from_raw_parts_mut(base.add(new_len), old_len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Fallible variant of [`remove`](Self::remove), returning [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfRange)
    }

    /// Fallible variant of [`swap_remove`](Self::swap_remove), returning [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfRange)
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T, const N: usize> Drop for InplaceVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, const N: usize> Clone for InplaceVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::default();
        for item in self.as_slice() {
            // Cannot overflow: the source holds at most N elements.
            unsafe {
                out.push_unchecked(item.clone());
            }
        }
        out
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source.as_slice() {
            unsafe {
                self.push_unchecked(item.clone());
            }
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for InplaceVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InplaceVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for InplaceVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for InplaceVec<T, N> {}
impl<T: Ord, const N: usize> Ord for InplaceVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for InplaceVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for InplaceVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for InplaceVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for InplaceVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for InplaceVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for InplaceVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for InplaceVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for InplaceVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
