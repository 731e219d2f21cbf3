// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;
use core::convert::Infallible;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice::{self, SliceIndex};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::GrowableArrayBehaviour;
use crate::error::{ConstructionError, GrowableArrayError};
use crate::growth;
use crate::guard::{ExtendGuard, PartialBuffer};
use crate::raw::{RawBuffer, storage_failure};

/// A contiguous growable array.
///
/// Slots `[0, len)` hold live elements, slots `[len, capacity)` are
/// reserved but uninitialized. Appending to a full array doubles its
/// capacity (`0 → 1 → 2 → 4 …`); the capacity never shrinks implicitly.
///
/// Every operation that builds several elements at once does so through a
/// scoped builder: when the k-th element fails to construct (a panicking
/// `Clone`, a panicking `Default`, or an `Err` from a user constructor), the
/// elements already built are dropped, fresh storage is freed, and the
/// failure is re-raised with the array's prior contents intact.
///
/// # Example
///
/// ```rust
/// use growable_array::{GrowableArray, GrowableArrayError};
///
/// fn example() -> Result<(), GrowableArrayError> {
///     let mut array = GrowableArray::from_elem(3, &'x');
///     assert_eq!(array.len(), 3);
///     assert_eq!(array.capacity(), 3);
///
///     array.try_push('y')?;
///     assert_eq!(array.capacity(), 6);
///
///     assert_eq!(*array.at(3)?, 'y');
///     assert!(array.at(4).is_err());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GrowableArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: GrowableArrayBehaviour,
}

// =============================================================================
// Storage
// =============================================================================

impl<T> GrowableArray<T> {
    fn from_raw_parts(buf: RawBuffer<T>, len: usize) -> Self {
        debug_assert!(len <= buf.capacity());

        Self {
            buf,
            len,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: GrowableArrayBehaviour::None,
        }
    }

    /// Splits the array into its storage and length without dropping anything.
    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let this = mem::ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the buffer is moved out exactly once.
        let buf = unsafe { ptr::read(&this.buf) };

        (buf, this.len)
    }

    /// Allocation hook for every storage request made through an existing array.
    fn allocate(&self, capacity: usize) -> Result<RawBuffer<T>, GrowableArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, GrowableArrayBehaviour::FailAtAllocation) {
            debug!("injected allocation failure for {} slots", capacity);
            return Err(GrowableArrayError::AllocationFailure { capacity });
        }

        RawBuffer::allocate(capacity).inspect_err(|_e| {
            debug!("allocation of {} slots failed: {}", capacity, _e);
        })
    }

    /// Moves the live elements into a fresh buffer of exactly `new_capacity`
    /// slots, then releases the old buffer.
    ///
    /// The old buffer is not touched if allocation fails.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), GrowableArrayError> {
        debug_assert!(new_capacity >= self.len);

        let new_buf = self.allocate(new_capacity)?;

        debug!(
            "reallocating: capacity {} -> {} ({} live)",
            self.buf.capacity(),
            new_capacity,
            self.len
        );

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): both buffers hold at least `len` slots and do not
            // overlap. The copies in the old buffer are never read or dropped again, since the old
            // RawBuffer only frees memory.
            ptr::copy_nonoverlapping(self.buf.ptr(), new_buf.ptr(), self.len);
        }

        // Dropping the old RawBuffer deallocates it.
        self.buf = new_buf;

        Ok(())
    }

    #[inline(always)]
    fn grow_if_full(&mut self) -> Result<(), GrowableArrayError> {
        if self.len < self.buf.capacity() {
            return Ok(());
        }

        let new_capacity = growth::grown_capacity(self.buf.capacity())?;
        self.reallocate(new_capacity)
    }

    /// Creates an empty array. No storage is allocated.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: GrowableArrayBehaviour::None,
        }
    }

    /// Creates an empty array with exactly `capacity` reserved slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| storage_failure::<T>(e))
    }

    /// Fallible version of [`GrowableArray::with_capacity`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, GrowableArrayError> {
        Ok(Self::from_raw_parts(RawBuffer::allocate(capacity)?, 0))
    }

    /// Changes the failure injection behaviour of this array.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: GrowableArrayBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of reserved slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if the array holds no live elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw pointer to the first slot. Dangling (but aligned) when nothing is allocated.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Mutable raw pointer to the first slot.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Returns the live elements as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are live; ptr is non-null and aligned even when unallocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are live and uniquely borrowed through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Ensures the array has at least `new_capacity` slots.
    ///
    /// `new_capacity` is a total capacity, not an additional amount. When it
    /// exceeds the current capacity, exactly `new_capacity` slots are
    /// allocated and the elements moved over; otherwise this is a no-op.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(e) = self.try_reserve(new_capacity) {
            storage_failure::<T>(e);
        }
    }

    /// Fallible version of [`GrowableArray::reserve`].
    ///
    /// On error the array is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), GrowableArrayError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        self.reallocate(new_capacity)
    }

    /// Shrinks the capacity to exactly `len()`, freeing the buffer entirely
    /// when the array is empty.
    pub fn shrink_to_fit(&mut self) {
        if let Err(e) = self.try_shrink_to_fit() {
            storage_failure::<T>(e);
        }
    }

    /// Fallible version of [`GrowableArray::shrink_to_fit`].
    ///
    /// On error the array is unchanged.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), GrowableArrayError> {
        if self.len == self.capacity() {
            return Ok(());
        }

        if self.len == 0 {
            debug!("releasing buffer of {} slots", self.capacity());
            self.buf = RawBuffer::new();
            return Ok(());
        }

        self.reallocate(self.len)
    }
}

// =============================================================================
// Bulk construction
// =============================================================================

impl<T> GrowableArray<T> {
    /// Fills `buf` slot by slot with `f(0), f(1), …` until it is full.
    fn fill<E, F>(buf: RawBuffer<T>, mut f: F) -> Result<Self, ConstructionError<E>>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let mut partial = PartialBuffer::new(buf);
        let mut index = 0;

        while !partial.is_full() {
            let value = f(index).map_err(ConstructionError::Element)?;
            partial.push(value);
            index += 1;
        }

        let (buf, len) = partial.finish();
        Ok(Self::from_raw_parts(buf, len))
    }

    fn fill_infallible<F>(buf: RawBuffer<T>, mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        match Self::fill(buf, |index| Ok::<T, Infallible>(f(index))) {
            Ok(array) => array,
            Err(ConstructionError::Element(never)) => match never {},
            Err(ConstructionError::Storage(e)) => storage_failure::<T>(e),
        }
    }

    /// Builds `len` elements from a fallible constructor.
    ///
    /// `f` receives the index of the element being built. If it returns
    /// `Err(e)` for some index, the elements built so far are dropped, the
    /// storage freed, and `ConstructionError::Element(e)` returned. A zero
    /// `len` yields an empty, unallocated array.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growable_array::GrowableArray;
    ///
    /// let squares = GrowableArray::try_from_fn(4, |i| Ok::<_, ()>(i * i)).unwrap();
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// ```
    pub fn try_from_fn<E, F>(len: usize, f: F) -> Result<Self, ConstructionError<E>>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let buf = RawBuffer::allocate(len)?;
        Self::fill(buf, f)
    }

    /// Builds `len` default elements.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::try_with_len(len).unwrap_or_else(|e| storage_failure::<T>(e))
    }

    /// Fallible version of [`GrowableArray::with_len`].
    pub fn try_with_len(len: usize) -> Result<Self, GrowableArrayError>
    where
        T: Default,
    {
        let buf = RawBuffer::allocate(len)?;
        Ok(Self::fill_infallible(buf, |_| T::default()))
    }

    /// Builds `len` clones of `value`.
    pub fn from_elem(len: usize, value: &T) -> Self
    where
        T: Clone,
    {
        Self::try_from_elem(len, value).unwrap_or_else(|e| storage_failure::<T>(e))
    }

    /// Fallible version of [`GrowableArray::from_elem`].
    pub fn try_from_elem(len: usize, value: &T) -> Result<Self, GrowableArrayError>
    where
        T: Clone,
    {
        let buf = RawBuffer::allocate(len)?;
        Ok(Self::fill_infallible(buf, |_| value.clone()))
    }

    /// Builds an array from an iterator of known length.
    ///
    /// Exactly `iter.len()` slots are allocated. An iterator that ends early
    /// yields a shorter array; surplus items are never pulled.
    pub fn from_iter_exact<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::try_from_iter_exact(iter).unwrap_or_else(|e| storage_failure::<T>(e))
    }

    /// Fallible version of [`GrowableArray::from_iter_exact`].
    pub fn try_from_iter_exact<I>(iter: I) -> Result<Self, GrowableArrayError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let buf = RawBuffer::allocate(iter.len())?;

        Ok(Self::build_from_iter(buf, iter))
    }

    fn build_from_iter<I>(buf: RawBuffer<T>, iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let capacity = buf.capacity();
        let mut partial = PartialBuffer::new(buf);

        for value in iter.take(capacity) {
            partial.push(value);
        }

        let (buf, len) = partial.finish();
        Self::from_raw_parts(buf, len)
    }

    /// Builds an array by cloning every element of `values`.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_iter_exact(values.iter().cloned())
    }

    /// Deep copy that reports storage failures instead of aborting.
    ///
    /// The copy has `capacity() == self.len()`.
    pub fn try_clone(&self) -> Result<Self, GrowableArrayError>
    where
        T: Clone,
    {
        let buf = self.allocate(self.len)?;
        Ok(Self::build_from_iter(buf, self.iter().cloned()))
    }

    /// Copy-assignment that reports storage failures instead of aborting.
    ///
    /// - If `source` does not fit in the current capacity, a complete copy
    ///   is built in fresh storage and swapped in only once it succeeded; on
    ///   failure `self` is untouched.
    /// - Otherwise the existing slots are reused: live elements are
    ///   overwritten with `clone_from`, surplus elements are dropped, and
    ///   missing ones are cloned into the spare capacity.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), GrowableArrayError>
    where
        T: Clone,
    {
        if self.capacity() < source.len {
            let buf = self.allocate(source.len)?;
            let mut replacement = Self::build_from_iter(buf, source.iter().cloned());
            self.swap(&mut replacement);
            return Ok(());
        }

        if self.len >= source.len {
            for (dst, src) in self.as_mut_slice().iter_mut().zip(source.iter()) {
                dst.clone_from(src);
            }
            self.truncate(source.len);
            return Ok(());
        }

        let reused = self.len;
        for (dst, src) in self.as_mut_slice().iter_mut().zip(source.iter()) {
            dst.clone_from(src);
        }
        self.extend_in_place(source.len - reused, |i| source[reused + i].clone());

        Ok(())
    }
}

// =============================================================================
// Element mutation
// =============================================================================

impl<T> GrowableArray<T> {
    /// Constructs `additional` elements into spare capacity.
    ///
    /// Capacity must already be sufficient. If `f` fails, the new elements
    /// are dropped and `len` is left as it was.
    fn extend_in_place<F>(&mut self, additional: usize, mut f: F)
    where
        F: FnMut(usize) -> T,
    {
        debug_assert!(self.len + additional <= self.capacity());

        let base = self.buf.ptr();
        let capacity = self.buf.capacity();

        // SAFETY: base/capacity describe our buffer; slots [0, len) are live and the rest are not.
        let mut guard = unsafe { ExtendGuard::new(base, &mut self.len, capacity) };
        for i in 0..additional {
            guard.push(f(i));
        }
        guard.commit();
    }

    /// Appends `value`, growing the capacity by doubling if the array is full.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn push(&mut self, value: T) {
        if let Err(e) = self.grow_if_full() {
            storage_failure::<T>(e);
        }

        // SAFETY: grow_if_full guarantees len < capacity.
        unsafe { self.write_last(value) };
    }

    /// Fallible version of [`GrowableArray::push`].
    ///
    /// On error `value` is dropped and the array is unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), GrowableArrayError> {
        self.grow_if_full()?;

        // SAFETY: grow_if_full guarantees len < capacity.
        unsafe { self.write_last(value) };

        Ok(())
    }

    /// Appends a clone of `value`.
    pub fn push_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push(value.clone());
    }

    /// Constructs an element with `f` and appends it, returning a reference
    /// to the new element.
    ///
    /// `f` runs before any growth, so if it panics the array is unchanged.
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = f();
        self.push(value);

        let last = self.len - 1;
        &mut self.as_mut_slice()[last]
    }

    /// Fallible version of [`GrowableArray::emplace_with`].
    ///
    /// If `f` returns `Err(e)`, `ConstructionError::Element(e)` is returned
    /// and the array is unchanged.
    pub fn try_emplace_with<E, F>(&mut self, f: F) -> Result<&mut T, ConstructionError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = f().map_err(ConstructionError::Element)?;
        self.try_push(value)?;

        let last = self.len - 1;
        Ok(&mut self.as_mut_slice()[last])
    }

    /// # Safety
    ///
    /// `len < capacity`.
    #[inline(always)]
    unsafe fn write_last(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slot `len` is within capacity and uninitialized.
            ptr::write(self.buf.slot(self.len), value);
        }
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// The capacity is unchanged.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live region, so it is read once.
        Some(unsafe { ptr::read(self.buf.slot(self.len)) })
    }

    /// Drops the elements at `[len, self.len())`. No-op if `len >= self.len()`.
    ///
    /// The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let tail_len = self.len - len;
        // Shrink first so a panicking Drop cannot cause a second drop of the tail.
        self.len = len;

        unsafe {
            // SAFETY: slots [len, len + tail_len) were live and are now unreachable.
            let tail = ptr::slice_from_raw_parts_mut(self.buf.slot(len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to `new_len`, filling new slots with values produced by `f`.
    ///
    /// Growing past the capacity reallocates to exactly `new_len` slots.
    /// Shrinking drops the trailing elements. The capacity never shrinks.
    /// If `f` panics, the elements it already produced are dropped and the
    /// previous elements are left as they were.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);
        self.extend_in_place(new_len - self.len, |_| f());
    }

    /// Resizes to `new_len`, filling new slots with clones of `value`.
    pub fn resize(&mut self, new_len: usize, value: &T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Exchanges storage, length and capacity with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty and unallocated.
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap(&mut taken);
        taken
    }

    /// Move-assignment: drops the current contents, then adopts the storage
    /// of `other`, which is left empty and unallocated.
    pub fn move_from(&mut self, other: &mut Self) {
        self.clear();
        self.buf = mem::replace(&mut other.buf, RawBuffer::new());
        self.len = mem::take(&mut other.len);
    }
}

// =============================================================================
// Element access
// =============================================================================

impl<T> GrowableArray<T> {
    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`GrowableArrayError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, GrowableArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(GrowableArrayError::OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`GrowableArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, GrowableArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(GrowableArrayError::OutOfRange { index, len })
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(first) => first,
            None => panic!("front() called on an empty GrowableArray"),
        }
    }

    /// Mutable first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(first) => first,
            None => panic!("front_mut() called on an empty GrowableArray"),
        }
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(last) => last,
            None => panic!("back() called on an empty GrowableArray"),
        }
    }

    /// Mutable last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => panic!("back_mut() called on an empty GrowableArray"),
        }
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: slots [0, len) are live; the RawBuffer field frees the storage afterwards.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let buf = RawBuffer::allocate(self.len).unwrap_or_else(|e| storage_failure::<T>(e));
        Self::build_from_iter(buf, self.iter().cloned())
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.try_clone_from(source) {
            storage_failure::<T>(e);
        }
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for GrowableArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowableArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for GrowableArray<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowableArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for GrowableArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowableArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_iter_exact(values)
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_cloned(value);
        }
    }
}
