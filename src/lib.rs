// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `inplace-vec`
//!
//! A `no_std`, fixed-capacity vector whose storage lives entirely inside the
//! value itself.
//!
//! The core type, [`InplaceVec<T, N>`], embeds `N` storage slots inline and
//! tracks a logical length `len ∈ 0..=N`. Elements are constructed and
//! destroyed in place as the length changes: slots in `[0, len)` hold live
//! values, slots in `[len, N)` are raw, uninitialized storage. No heap
//! allocation is ever performed, for any element type.
//!
//! ## When to use this crate
//!
//! - You are in a `no_std`, embedded, or real-time environment.
//! - You know the maximum length at compile time.
//! - You want predictable, allocation-free behavior with `Vec`-like
//!   semantics, including for element types that own resources (`String`,
//!   file handles, …) — elements are not required to be `Copy` or `Clone`.
//!
//! It may not be the best fit if you need dynamic growth, or if `N` is so
//! large that passing the vector by value becomes expensive (moving an
//! `InplaceVec<T, N>` moves the entire buffer, not just the live prefix).
//!
//! ## Capacity and error semantics
//!
//! Every operation whose result would hold more than `N` elements refuses
//! upfront with [`Error::CapacityExceeded`] and leaves the vector observably
//! unchanged. Checked access past the current length returns
//! [`Error::OutOfRange`]. Three tiers cover the capacity-sensitive surface:
//!
//! - **Fallible** (`Result`, no change on error): [`push`](InplaceVec::push),
//!   [`insert`](InplaceVec::insert), [`insert_slice`](InplaceVec::insert_slice),
//!   [`extend_from_slice`](InplaceVec::extend_from_slice),
//!   [`try_extend_from_iter`](InplaceVec::try_extend_from_iter),
//!   [`resize`](InplaceVec::resize), [`assign`](InplaceVec::assign), …
//! - **Try** (`Option`, never an error): [`try_push`](InplaceVec::try_push)
//!   hands the value back when full;
//!   [`extend_until_full`](InplaceVec::extend_until_full) consumes a source
//!   iterator only as far as capacity allows and returns it for the caller
//!   to continue with.
//! - **Unchecked** (`unsafe`, caller-guaranteed preconditions):
//!   [`push_unchecked`](InplaceVec::push_unchecked),
//!   [`get_unchecked`](InplaceVec::get_unchecked).
//!
//! Indexing (`v[i]`, `v[a..b]`) follows slice semantics and **panics** on
//! out-of-bounds, exactly like built-in slices. Only range/index misuse
//! panics; capacity pressure never does.
//!
//! ## Swapping
//!
//! Two vectors of the same type exchange their full storage and lengths with
//! [`core::mem::swap`]; there is no inherent method for this (it would shadow
//! `<[T]>::swap` reachable through `Deref`).
//!
//! ## Features
//!
//! - `serde` — `Serialize`/`Deserialize` for `InplaceVec<T, N>` as a plain
//!   sequence of the live elements; deserializing more than `N` elements is
//!   an error.
//!
//! ## Example
//!
//! ```rust
//! use inplace_vec::InplaceVec;
//!
//! let mut v: InplaceVec<i32, 4> = InplaceVec::new();
//! v.push(1).unwrap();
//! v.extend_from_slice(&[2, 3]).unwrap();
//! v.insert(1, 9).unwrap();
//! assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
//! assert!(v.push(5).is_err()); // full, untouched
//! assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
//! ```
//!
//! See [`InplaceVec`] for detailed semantics and complexity notes.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::InplaceVec;
