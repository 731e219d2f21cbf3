// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Contiguous growable array with explicit storage management.
//!
//! `GrowableArray<T>` owns a single contiguous buffer and keeps a strict
//! separation between *allocated slots* (`capacity()`) and *live elements*
//! (`len()`). Slots `[0, len)` hold exactly one value each, slots
//! `[len, capacity)` hold nothing.
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: appending to a full array grows the capacity to
//!   `max(1, 2 * capacity)`, so capacities follow `0 → 1 → 2 → 4 → 8 …`.
//! - **Rollback on partial construction**: if cloning, defaulting or a user
//!   constructor fails while several elements are being built, the elements
//!   built so far are dropped, any fresh buffer is freed, and the failure is
//!   re-raised. Nothing leaks and nothing is dropped twice.
//! - **Acquire-new, populate-new, release-old**: every buffer replacement
//!   fully prepares the new buffer before the old one is released.
//! - **Fallible storage**: every allocating operation has a `try_*` form that
//!   reports [`GrowableArrayError`] instead of aborting.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use growable_array::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! array.push(1);
//! array.push(2);
//! array.push(3);
//!
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array, [1, 2, 3]);
//!
//! array.pop();
//! array.shrink_to_fit();
//! assert_eq!(array.capacity(), 2);
//! ```
//!
//! # Example: Fallible Construction
//!
//! ```rust
//! use growable_array::{ConstructionError, GrowableArray};
//!
//! let result = GrowableArray::try_from_fn(4, |index| {
//!     if index < 3 {
//!         Ok(index * 10)
//!     } else {
//!         Err("sensor offline")
//!     }
//! });
//!
//! assert!(matches!(result, Err(ConstructionError::Element("sensor offline"))));
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! growable-array = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`GrowableArrayBehaviour`] to drive the error paths:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use growable_array::{GrowableArray, GrowableArrayBehaviour};
//!
//!     #[test]
//!     fn test_handles_allocation_failure() {
//!         let mut array = GrowableArray::<u8>::new();
//!         array.change_behaviour(GrowableArrayBehaviour::FailAtAllocation);
//!
//!         assert!(array.try_push(1).is_err());
//!     }
//! }
//! ```
//!
//! # Logging
//!
//! With the `logging` feature, reallocations and allocation failures are
//! reported through the [`log`](https://docs.rs/log) facade at `debug`
//! level, rollbacks at `trace` level.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[macro_use]
mod logging;

mod error;
mod growable_array;
mod growth;
mod guard;
mod iter;
mod macros;
mod raw;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;

#[cfg(test)]
mod tests;

pub use error::{ConstructionError, GrowableArrayError};
pub use growable_array::GrowableArray;
pub use iter::IntoIter;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::GrowableArrayBehaviour;
