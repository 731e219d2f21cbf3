// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::GrowableArrayError;

/// Capacity of the first allocation made by an append.
pub(crate) const MIN_NON_ZERO_CAPACITY: usize = 1;

/// Capacity to grow to when an append finds the buffer full.
///
/// `0 → 1 → 2 → 4 → 8 …`. Doubling keeps the total relocation work of `n`
/// appends in O(n).
#[inline]
pub(crate) fn grown_capacity(current: usize) -> Result<usize, GrowableArrayError> {
    if current == 0 {
        return Ok(MIN_NON_ZERO_CAPACITY);
    }

    current
        .checked_mul(2)
        .ok_or(GrowableArrayError::CapacityOverflow)
}
