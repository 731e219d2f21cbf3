// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Forward, reverse and owning traversal.
//!
//! Borrowed iterators are plain slice iterators, so the borrow checker
//! rejects any reallocating call while one is alive.

use core::iter::{FusedIterator, Rev};
use core::ptr;
use core::slice;

use crate::growable_array::GrowableArray;
use crate::raw::RawBuffer;

impl<T> GrowableArray<T> {
    /// Iterates over the live elements, front to back.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the live elements, front to back.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterates over the live elements, back to front.
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Iterates mutably over the live elements, back to front.
    pub fn iter_rev_mut(&mut self) -> Rev<slice::IterMut<'_, T>> {
        self.iter_mut().rev()
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_raw_parts();

        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

/// Owning iterator over the elements of a [`GrowableArray`].
///
/// Elements not yet yielded are dropped together with the iterator, which
/// then frees the buffer.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [start, end) are live.
        unsafe { slice::from_raw_parts(self.buf.slot(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: slot `start` is live; advancing `start` removes it from the live range.
        let value = unsafe { ptr::read(self.buf.slot(self.start)) };
        self.start += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: slot `end` was live and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.slot(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: slots [start, end) are the only live ones left.
            let remaining = ptr::slice_from_raw_parts_mut(self.buf.slot(self.start), self.end - self.start);
            ptr::drop_in_place(remaining);
        }
    }
}
