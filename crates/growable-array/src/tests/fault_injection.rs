// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element construction failures in the middle of bulk operations.

use std::panic::{AssertUnwindSafe, catch_unwind};

use growable_array_test_utils::{DropCounter, Tracked};

use crate::{ConstructionError, GrowableArray};

fn tracked_array(counter: &DropCounter, values: core::ops::Range<i32>) -> GrowableArray<Tracked> {
    GrowableArray::from_iter_exact(values.map(|i| counter.track(i)))
}

fn values(array: &GrowableArray<Tracked>) -> Vec<i32> {
    array.iter().map(Tracked::value).collect()
}

// =============================================================================
// clone(), from_slice(), from_elem()
// =============================================================================

#[test]
fn test_clone_failure_drops_partial_copy() {
    let counter = DropCounter::new();
    let original = tracked_array(&counter, 0..5);

    counter.fail_clone_after(2);
    let result = catch_unwind(AssertUnwindSafe(|| original.clone()));

    assert!(result.is_err());
    assert_eq!(counter.clones(), 2);
    assert_eq!(counter.live(), 5);
    assert_eq!(values(&original), [0, 1, 2, 3, 4]);

    drop(original);
    assert!(counter.is_balanced());
}

#[test]
fn test_clone_failure_on_first_element() {
    let counter = DropCounter::new();
    let original = tracked_array(&counter, 0..3);

    counter.fail_clone_after(0);
    let result = catch_unwind(AssertUnwindSafe(|| original.clone()));

    assert!(result.is_err());
    assert_eq!(counter.live(), 3);
}

#[test]
fn test_from_slice_failure_drops_partial_copy() {
    let counter = DropCounter::new();
    let source: Vec<Tracked> = (0..4).map(|i| counter.track(i)).collect();

    counter.fail_clone_after(3);
    let result = catch_unwind(AssertUnwindSafe(|| GrowableArray::from_slice(&source)));

    assert!(result.is_err());
    assert_eq!(counter.live(), 4);

    drop(source);
    assert!(counter.is_balanced());
}

#[test]
fn test_from_elem_failure_drops_partial_copy() {
    let counter = DropCounter::new();
    let prototype = counter.track(7);

    counter.fail_clone_after(2);
    let result = catch_unwind(AssertUnwindSafe(|| GrowableArray::from_elem(4, &prototype)));

    assert!(result.is_err());
    assert_eq!(counter.clones(), 2);
    assert_eq!(counter.live(), 1);
}

// =============================================================================
// clone_from()
// =============================================================================

#[test]
fn test_clone_from_replacement_failure_leaves_destination_untouched() {
    let counter = DropCounter::new();
    let source = tracked_array(&counter, 0..4);
    let mut destination = tracked_array(&counter, 10..12);
    let ptr = destination.as_ptr();

    counter.fail_clone_after(1);
    let result = catch_unwind(AssertUnwindSafe(|| destination.clone_from(&source)));

    assert!(result.is_err());
    assert_eq!(values(&destination), [10, 11]);
    assert_eq!(destination.capacity(), 2);
    assert_eq!(destination.as_ptr(), ptr);
    assert_eq!(counter.live(), 6);
}

#[test]
fn test_clone_from_extend_failure_restores_len() {
    let counter = DropCounter::new();
    let source = tracked_array(&counter, 0..5);

    let mut destination = GrowableArray::with_capacity(8);
    destination.push(counter.track(10));
    destination.push(counter.track(11));

    // Two in-place assignments and one fresh clone succeed.
    counter.fail_clone_after(3);
    let result = catch_unwind(AssertUnwindSafe(|| destination.clone_from(&source)));

    assert!(result.is_err());
    assert_eq!(destination.len(), 2);
    assert_eq!(destination.capacity(), 8);
    assert_eq!(values(&destination), [0, 1]);
    assert_eq!(counter.live(), 7);

    drop(destination);
    drop(source);
    assert!(counter.is_balanced());
}

// =============================================================================
// resize(), resize_with()
// =============================================================================

#[test]
fn test_resize_failure_keeps_prefix() {
    let counter = DropCounter::new();
    let mut array = tracked_array(&counter, 0..2);
    let prototype = counter.track(9);

    counter.fail_clone_after(2);
    let result = catch_unwind(AssertUnwindSafe(|| array.resize(6, &prototype)));

    assert!(result.is_err());
    assert_eq!(values(&array), [0, 1]);
    assert_eq!(counter.live(), 3);

    // Still fully usable.
    array.resize(3, &prototype);
    assert_eq!(values(&array), [0, 1, 9]);
}

#[test]
fn test_resize_with_panicking_closure() {
    let counter = DropCounter::new();
    let mut array = tracked_array(&counter, 0..3);
    let mut calls = 0;

    let result = catch_unwind(AssertUnwindSafe(|| {
        array.resize_with(8, || {
            calls += 1;
            if calls == 4 {
                panic!("closure failure");
            }
            counter.track(100 + calls)
        })
    }));

    assert!(result.is_err());
    assert_eq!(values(&array), [0, 1, 2]);
    assert_eq!(counter.constructed(), 6);
    assert_eq!(counter.live(), 3);
}

// =============================================================================
// try_from_fn()
// =============================================================================

#[test]
fn test_try_from_fn_error_at_each_position_is_balanced() {
    for failing in 0..5 {
        let counter = DropCounter::new();

        let result = GrowableArray::try_from_fn(5, |i| {
            if i == failing {
                Err(i)
            } else {
                Ok(counter.track(i as i32))
            }
        });

        assert!(matches!(result, Err(ConstructionError::Element(i)) if i == failing));
        assert_eq!(counter.constructed(), failing);
        assert!(counter.is_balanced());
    }
}

#[test]
fn test_try_from_fn_panic_is_balanced() {
    let counter = DropCounter::new();

    let result = catch_unwind(AssertUnwindSafe(|| {
        GrowableArray::try_from_fn(4, |i| {
            if i == 2 {
                panic!("constructor failure");
            }
            Ok::<_, ()>(counter.track(i as i32))
        })
    }));

    assert!(result.is_err());
    assert!(counter.is_balanced());
}

// =============================================================================
// emplace_with(), push_cloned()
// =============================================================================

#[test]
fn test_emplace_with_panic_leaves_array_unchanged() {
    let counter = DropCounter::new();
    let mut array = tracked_array(&counter, 0..2);

    let result = catch_unwind(AssertUnwindSafe(|| {
        array.emplace_with(|| panic!("constructor failure"));
    }));

    assert!(result.is_err());
    assert_eq!(values(&array), [0, 1]);
    assert_eq!(array.capacity(), 2);
}

#[test]
fn test_push_cloned_failure_leaves_array_unchanged() {
    let counter = DropCounter::new();
    let mut array = tracked_array(&counter, 0..2);
    let value = counter.track(5);

    counter.fail_clone_after(0);
    let result = catch_unwind(AssertUnwindSafe(|| array.push_cloned(&value)));

    assert!(result.is_err());
    assert_eq!(values(&array), [0, 1]);
    assert_eq!(array.capacity(), 2);
}
