// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scoped builders for multi-element construction.
//!
//! Both guards count the slots they have written. If they are dropped
//! before being committed (an element constructor returned `Err` or
//! panicked), they drop exactly the slots they wrote and nothing else.

use core::mem::ManuallyDrop;
use core::ptr;

use crate::raw::RawBuffer;

/// A fresh buffer being filled from slot 0.
///
/// On failure the built prefix is dropped and the buffer freed.
pub(crate) struct PartialBuffer<T> {
    buf: RawBuffer<T>,
    initialized: usize,
}

impl<T> PartialBuffer<T> {
    pub(crate) fn new(buf: RawBuffer<T>) -> Self {
        Self {
            buf,
            initialized: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.initialized == self.buf.capacity()
    }

    /// Constructs the next slot.
    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        assert!(!self.is_full(), "PartialBuffer overflow");

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): initialized < capacity, and the slot is uninitialized.
            ptr::write(self.buf.slot(self.initialized), value);
        }
        self.initialized += 1;
    }

    /// Hands over the buffer and the number of constructed slots.
    pub(crate) fn finish(self) -> (RawBuffer<T>, usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the buffer is moved out exactly once.
        let buf = unsafe { ptr::read(&this.buf) };

        (buf, this.initialized)
    }
}

impl<T> Drop for PartialBuffer<T> {
    fn drop(&mut self) {
        trace!(
            "rolling back partial buffer: dropping {} of {} slots",
            self.initialized,
            self.buf.capacity()
        );

        unsafe {
            // SAFETY: exactly the first `initialized` slots were constructed by `push`.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.initialized));
        }
        // `buf` frees the storage when its own drop runs.
    }
}

/// Appends into spare capacity of a live buffer.
///
/// The owner's length is only published by [`ExtendGuard::commit`]; until
/// then the new tail is invisible, so a failure restores the previous
/// length and leaves the existing elements untouched.
pub(crate) struct ExtendGuard<'a, T> {
    base: *mut T,
    len: &'a mut usize,
    capacity: usize,
    written: usize,
}

impl<'a, T> ExtendGuard<'a, T> {
    /// # Safety
    ///
    /// `base` must point to storage of `capacity` slots whose first `*len`
    /// slots are live and the rest uninitialized, and it must stay valid for
    /// the guard's lifetime.
    pub(crate) unsafe fn new(base: *mut T, len: &'a mut usize, capacity: usize) -> Self {
        debug_assert!(*len <= capacity);

        Self {
            base,
            len,
            capacity,
            written: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        let index = *self.len + self.written;
        assert!(index < self.capacity, "ExtendGuard overflow");

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): index < capacity, slot is beyond the live region.
            ptr::write(self.base.add(index), value);
        }
        self.written += 1;
    }

    /// Publishes the new tail.
    pub(crate) fn commit(mut self) {
        *self.len += self.written;
        self.written = 0;
    }
}

impl<T> Drop for ExtendGuard<'_, T> {
    fn drop(&mut self) {
        if self.written == 0 {
            return;
        }

        trace!("rolling back extension: dropping {} new slots", self.written);

        unsafe {
            // SAFETY: slots [len, len + written) were constructed by `push` and never published.
            let tail = self.base.add(*self.len);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(tail, self.written));
        }
    }
}
