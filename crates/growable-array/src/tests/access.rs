// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::{GrowableArray, GrowableArrayError};

// =============================================================================
// at(), at_mut()
// =============================================================================

#[test]
fn test_at_in_range_matches_index() {
    let array = GrowableArray::from([10u8, 20, 30]);

    for i in 0..array.len() {
        assert_eq!(array.at(i), Ok(&array[i]));
    }
}

#[test]
fn test_at_out_of_range() {
    let array = GrowableArray::from([10u8, 20, 30]);

    assert_eq!(array.at(3), Err(GrowableArrayError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(
        array.at(usize::MAX),
        Err(GrowableArrayError::OutOfRange {
            index: usize::MAX,
            len: 3
        })
    );
}

#[test]
fn test_at_ignores_spare_capacity() {
    let mut array = GrowableArray::with_capacity(4);
    array.push(1u8);

    assert!(array.at(1).is_err());
}

#[test]
fn test_at_mut() {
    let mut array = GrowableArray::from([1u8, 2]);

    *array.at_mut(1).expect("Failed to at_mut(1)") = 5;

    assert_eq!(array, [1, 5]);
    assert!(matches!(array.at_mut(2), Err(GrowableArrayError::OutOfRange { .. })));
}

#[test]
fn test_out_of_range_display() {
    let error = GrowableArrayError::OutOfRange { index: 7, len: 2 };

    assert_eq!(error.to_string(), "index 7 is out of range for length 2");
}

// =============================================================================
// Index, IndexMut
// =============================================================================

#[test]
fn test_index_and_ranges() {
    let mut array = GrowableArray::from([1u8, 2, 3, 4]);
    array[0] = 9;

    assert_eq!(array[0], 9);
    assert_eq!(&array[1..3], &[2, 3]);
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let array = GrowableArray::from([1u8]);
    let _value = array[1];
}

// =============================================================================
// front(), back()
// =============================================================================

#[test]
fn test_front_and_back() {
    let mut array = GrowableArray::from([1u8, 2, 3]);

    assert_eq!(*array.front(), 1);
    assert_eq!(*array.back(), 3);

    *array.front_mut() = 0;
    *array.back_mut() = 4;

    assert_eq!(array, [0, 2, 4]);
}

#[test]
#[should_panic(expected = "back() called on an empty GrowableArray")]
fn test_back_on_empty_panics() {
    let array: GrowableArray<u8> = GrowableArray::new();
    array.back();
}

#[test]
#[should_panic(expected = "front() called on an empty GrowableArray")]
fn test_front_on_empty_panics() {
    let array: GrowableArray<u8> = GrowableArray::with_capacity(2);
    array.front();
}

// =============================================================================
// PartialEq, Ord
// =============================================================================

#[test]
fn test_equal_construction_compares_equal() {
    let mut a = GrowableArray::from_elem(3, &'x');
    let b = GrowableArray::from_elem(3, &'x');

    assert_eq!(a, b);

    a.push('y');
    assert_ne!(a, b);
    assert!(a > b);
    assert!(b < a);
}

#[test]
fn test_equality_ignores_capacity() {
    let a = GrowableArray::from([1u8, 2]);
    let mut b = GrowableArray::with_capacity(16);
    b.push(1u8);
    b.push(2u8);

    assert_eq!(a, b);
}

#[test]
fn test_lexicographic_ordering() {
    let a = GrowableArray::from([1, 2, 3]);
    let b = GrowableArray::from([1, 3]);
    let empty: GrowableArray<i32> = GrowableArray::new();

    assert!(a < b);
    assert!(empty < a);
    assert!(a <= a.clone());
    assert!(a >= a.clone());
    assert_eq!(a.cmp(&b), core::cmp::Ordering::Less);
}

#[test]
fn test_partial_ord_with_nan() {
    let a = GrowableArray::from([f64::NAN]);
    let b = GrowableArray::from([1.0]);

    assert_eq!(a.partial_cmp(&b), None);
    assert_ne!(a, a.clone());
}

// =============================================================================
// Hash
// =============================================================================

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_hash_matches_slice_hash() {
    let array = GrowableArray::from([1u32, 2, 3]);

    assert_eq!(hash_of(&array), hash_of(&[1u32, 2, 3][..]));
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_snapshot() {
    let mut array = GrowableArray::with_capacity(5);
    array.push(1u8);
    array.push(2u8);

    let snapshot = format!("{:?}", array);
    insta::assert_snapshot!(snapshot, @"GrowableArray { len: 2, capacity: 5, data: [1, 2] }");
}

#[test]
fn test_into_iter_debug_snapshot() {
    let mut iter = GrowableArray::from([1u8, 2, 3]).into_iter();
    iter.next();

    let snapshot = format!("{:?}", iter);
    insta::assert_snapshot!(snapshot, @"IntoIter([2, 3])");
}
