// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw slot storage: one contiguous allocation and its capacity.
//!
//! `RawBuffer` never constructs or drops elements. Whoever holds it is
//! responsible for tracking which slots are live.

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::error::GrowableArrayError;

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuffer exclusively owns its allocation; transferring or sharing
// it is as safe as transferring or sharing the `T`s stored in it.
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Empty, unallocated storage.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates exactly `capacity` uninitialized slots.
    ///
    /// Zero capacity and zero-sized `T` never reach the allocator.
    pub(crate) fn allocate(capacity: usize) -> Result<Self, GrowableArrayError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        if Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _marker: PhantomData,
            });
        }

        // Layout::array rejects sizes above isize::MAX.
        let layout = Layout::array::<T>(capacity).map_err(|_| GrowableArrayError::CapacityOverflow)?;

        // SAFETY: layout has non-zero size (capacity > 0 and T is not zero-sized).
        let ptr = unsafe { alloc(layout) };

        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => Ok(Self {
                ptr,
                cap: capacity,
                _marker: PhantomData,
            }),
            None => Err(GrowableArrayError::AllocationFailure { capacity }),
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index <= capacity()`.
    #[inline(always)]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        // SAFETY (PRECONDITIONS ARE MET): index is within the allocation or one past its end.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    fn layout(&self) -> Option<Layout> {
        if self.cap == 0 || Self::IS_ZST {
            return None;
        }

        Layout::array::<T>(self.cap).ok()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.layout() {
            // SAFETY: ptr was returned by `alloc` with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

/// Converts a storage failure on an infallible path into the process-level
/// reaction used by `alloc`: abort through `handle_alloc_error` when the
/// allocator refused, panic on arithmetic overflow.
#[cold]
#[inline(never)]
pub(crate) fn storage_failure<T>(error: GrowableArrayError) -> ! {
    match error {
        GrowableArrayError::AllocationFailure { capacity } => match Layout::array::<T>(capacity) {
            Ok(layout) => handle_alloc_error(layout),
            Err(_) => panic!("capacity overflow"),
        },
        GrowableArrayError::CapacityOverflow => panic!("capacity overflow"),
        GrowableArrayError::OutOfRange { index, len } => {
            panic!("index {index} is out of range for length {len}")
        }
    }
}
