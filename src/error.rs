// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `InplaceVec`.
//!
//! These errors represent capacity and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`InplaceVec`](crate::InplaceVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation's resulting length would exceed the fixed capacity `N`.
    ///
    /// Returned before any slot is mutated; the vector is left unchanged.
    CapacityExceeded,
    /// A checked access or position was not within the current length.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::OutOfRange => f.write_str("index out of range"),
        }
    }
}

impl CoreError for Error {}
