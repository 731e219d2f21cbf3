// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Construction/destruction bookkeeping for container tests.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Tally {
    constructed: Cell<usize>,
    dropped: Cell<usize>,
    clones: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
}

/// Shared tallies for every [`Tracked`] value it creates.
///
/// # Example
/// ```
/// use growable_array_test_utils::DropCounter;
///
/// let counter = DropCounter::new();
/// let a = counter.track(1);
/// let b = a.clone();
///
/// assert_eq!(counter.constructed(), 2);
/// drop((a, b));
/// assert!(counter.is_balanced());
/// ```
#[derive(Clone, Default)]
pub struct DropCounter {
    tally: Rc<Tally>,
}

impl DropCounter {
    /// Creates a counter with all tallies at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new tracked value.
    pub fn track(&self, value: i32) -> Tracked {
        self.tally.constructed.set(self.tally.constructed.get() + 1);

        Tracked {
            value,
            counter: self.clone(),
        }
    }

    /// Lets `successful` further clones through, then makes the next clone
    /// panic with `"injected clone failure"`. The panic is raised before the
    /// clone is constructed, so tallies stay consistent.
    pub fn fail_clone_after(&self, successful: usize) {
        self.tally.clone_budget.set(Some(successful));
    }

    /// Removes any pending clone failure.
    pub fn disarm(&self) {
        self.tally.clone_budget.set(None);
    }

    /// Number of values constructed so far (fresh and cloned).
    pub fn constructed(&self) -> usize {
        self.tally.constructed.get()
    }

    /// Number of values dropped so far.
    pub fn dropped(&self) -> usize {
        self.tally.dropped.get()
    }

    /// Number of successful clones.
    pub fn clones(&self) -> usize {
        self.tally.clones.get()
    }

    /// Values constructed but not yet dropped.
    pub fn live(&self) -> usize {
        self.constructed() - self.dropped()
    }

    /// `true` when every constructed value has been dropped exactly once.
    pub fn is_balanced(&self) -> bool {
        self.constructed() == self.dropped()
    }

    fn before_clone(&self) {
        if let Some(budget) = self.tally.clone_budget.get() {
            if budget == 0 {
                self.tally.clone_budget.set(None);
                panic!("injected clone failure");
            }
            self.tally.clone_budget.set(Some(budget - 1));
        }
    }
}

impl fmt::Debug for DropCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropCounter")
            .field("constructed", &self.constructed())
            .field("dropped", &self.dropped())
            .field("clones", &self.clones())
            .finish()
    }
}

/// An element that reports its lifecycle to a [`DropCounter`].
///
/// Compares and orders by its value only.
pub struct Tracked {
    value: i32,
    counter: DropCounter,
}

impl Tracked {
    /// The payload.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Replaces the payload in place.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counter.before_clone();
        let tracked = self.counter.track(self.value);
        self.counter.tally.clones.set(self.counter.clones() + 1);

        tracked
    }

    fn clone_from(&mut self, source: &Self) {
        // Assignment: no construction, no drop.
        self.counter.before_clone();
        self.value = source.value;
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let tally = &self.counter.tally;
        tally.dropped.set(tally.dropped.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}
