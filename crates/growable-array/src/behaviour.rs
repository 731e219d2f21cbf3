// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting failures in `GrowableArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
/// It only affects allocations requested through an existing array
/// (growth, `try_reserve`, `try_shrink_to_fit`, `try_clone`, `try_clone_from`);
/// associated constructors such as `with_len` are unaffected.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use growable_array::{GrowableArray, GrowableArrayBehaviour, GrowableArrayError};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), GrowableArrayError> {
///         let mut array = GrowableArray::new();
///
///         // Inject failure
///         array.change_behaviour(GrowableArrayBehaviour::FailAtAllocation);
///         assert!(array.try_push(1u8).is_err());
///
///         // Reset to normal behaviour
///         array.change_behaviour(GrowableArrayBehaviour::None);
///         array.try_push(1u8)?;
///         Ok(())
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowableArrayBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every allocation reports `AllocationFailure` without touching the
    /// existing storage.
    FailAtAllocation,
}

impl Default for GrowableArrayBehaviour {
    fn default() -> Self {
        Self::None
    }
}
