// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growable-array.

use thiserror::Error;

/// Error type for `GrowableArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GrowableArrayError {
    /// Checked access past the live region.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length at the time of the call.
        len: usize,
    },

    /// The requested capacity does not fit in a valid layout.
    ///
    /// Raised when `capacity * size_of::<T>()` would exceed `isize::MAX`,
    /// or when doubling the capacity overflows `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The global allocator could not provide the requested storage.
    #[error("allocation of {capacity} slots failed")]
    AllocationFailure {
        /// Number of slots that were requested.
        capacity: usize,
    },
}

/// Error type for fallible bulk and single-element construction.
///
/// `E` is the error produced by the caller's element constructor. It is
/// returned unchanged once the partially built elements have been dropped.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConstructionError<E> {
    /// Storage for the elements could not be obtained.
    #[error(transparent)]
    Storage(#[from] GrowableArrayError),

    /// An element constructor failed.
    #[error("element construction failed: {0}")]
    Element(E),
}

impl<E> ConstructionError<E> {
    /// Returns the element error, if construction failed on an element.
    pub fn into_element(self) -> Option<E> {
        match self {
            Self::Element(e) => Some(e),
            Self::Storage(_) => None,
        }
    }
}
