// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`GrowableArray`](crate::GrowableArray) from a literal sequence.
///
/// - `growable_array![]` is empty and unallocated.
/// - `growable_array![a, b, c]` moves the listed values in, capacity equals length.
/// - `growable_array![value; n]` holds `n` clones of `value`.
///
/// # Example
///
/// ```rust
/// use growable_array::growable_array;
///
/// let letters = growable_array!['a', 'b', 'c'];
/// assert_eq!(letters.capacity(), 3);
///
/// let zeros = growable_array![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! growable_array {
    () => {
        $crate::GrowableArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::GrowableArray::from_elem($len, &$value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::GrowableArray::from([$($value),+])
    };
}
