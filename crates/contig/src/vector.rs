// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::ManuallyDrop;
use core::ptr;
use core::slice;

use contig_storage::{AllocError, RawStorage};

#[cfg(any(test, feature = "test_utils"))]
use contig_storage::StorageBehaviour;

use crate::error::VectorError;
use crate::slot::{self, LenOnDrop};

/// A growable, contiguous sequence of `T` with explicit slot lifecycle.
///
/// Storage and elements are managed separately: the block holds `capacity()`
/// slots, of which exactly the first `len()` are live. Slots past `len()` are
/// never read, copied or destroyed as `T`.
///
/// Every operation that may allocate returns a `Result`; on
/// [`VectorError::Alloc`] the vector is unchanged.
///
/// # Example
///
/// ```rust
/// use contig::{Vector, VectorError};
///
/// fn example() -> Result<(), VectorError> {
///     let mut vector = Vector::from_array([1, 2, 3])?;
///     assert_eq!(vector.capacity(), 3);
///
///     vector.push_back(4)?;
///     assert_eq!(vector.len(), 4);
///     assert_eq!(vector.capacity(), 7); // 2 * 3 + 1
///
///     assert_eq!(vector.at(10), Err(VectorError::IndexOutOfRange { index: 10, len: 4 }));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct Vector<T> {
    storage: RawStorage<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: StorageBehaviour,
}

impl<T> Vector<T> {
    fn from_storage(storage: RawStorage<T>) -> Self {
        Self {
            storage,
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: StorageBehaviour::default(),
        }
    }

    #[cfg(any(test, feature = "test_utils"))]
    fn allocate(&self, capacity: usize) -> Result<RawStorage<T>, AllocError> {
        RawStorage::allocate_with(capacity, self.behaviour)
    }

    #[cfg(not(any(test, feature = "test_utils")))]
    #[inline(always)]
    fn allocate(&self, capacity: usize) -> Result<RawStorage<T>, AllocError> {
        RawStorage::allocate(capacity)
    }

    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: StorageBehaviour::None,
        }
    }

    /// Creates an empty vector with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Alloc`] if the block cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, VectorError> {
        Ok(Self::from_storage(RawStorage::allocate(capacity)?))
    }

    /// Creates a vector of `len` default values; `capacity() == len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig::Vector;
    ///
    /// let vector: Vector<u32> = Vector::with_len(3).unwrap();
    /// assert_eq!(vector.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn with_len(len: usize) -> Result<Self, VectorError>
    where
        T: Default,
    {
        let mut vector = Self::with_capacity(len)?;
        vector.fill_with(len, T::default);
        Ok(vector)
    }

    /// Creates a vector of `len` copies of `value`; `capacity() == len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig::Vector;
    ///
    /// let vector = Vector::from_elem(3, 7).unwrap();
    /// assert_eq!(vector.as_slice(), &[7, 7, 7]);
    /// assert_eq!(vector.capacity(), 3);
    /// ```
    pub fn from_elem(len: usize, value: T) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity(len)?;
        vector.fill_with(len, || value.clone());
        Ok(vector)
    }

    /// Creates a vector holding copies of `values`; `capacity() == values.len()`.
    pub fn from_slice(values: &[T]) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity(values.len())?;
        vector.clone_into_tail(values);
        Ok(vector)
    }

    /// Creates a vector by moving the elements of a literal array in order.
    ///
    /// `capacity() == N`. On allocation failure the array is dropped.
    pub fn from_array<const N: usize>(values: [T; N]) -> Result<Self, VectorError> {
        let mut vector = Self::with_capacity(N)?;
        let values = ManuallyDrop::new(values);

        // SAFETY: the fresh block has N uninitialized slots; the array is
        // never dropped, so each value ends up live exactly once.
        unsafe { slot::move_range(values.as_ptr(), vector.storage.as_mut_ptr(), N) };
        vector.len = N;

        Ok(vector)
    }

    /// Returns a deep copy with its own storage; `capacity() == len()`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Alloc`] if the copy's block cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        Self::from_slice(self.as_slice())
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns `true` if the vector has no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Constructs `count` values produced by `make` into the free tail.
    fn fill_with<F>(&mut self, count: usize, mut make: F)
    where
        F: FnMut() -> T,
    {
        assert!(
            count <= self.capacity() - self.len,
            "Vector::fill_with: {count} values do not fit"
        );

        let base = self.storage.as_mut_ptr();
        let mut len = LenOnDrop::new(&mut self.len);

        for _ in 0..count {
            let value = make();
            // SAFETY: len.current() < capacity and the slot is past the live prefix.
            unsafe { slot::construct(base.add(len.current()), value) };
            len.increment();
        }
    }

    /// Copy-constructs every element of `values` into the free tail.
    fn clone_into_tail(&mut self, values: &[T])
    where
        T: Clone,
    {
        assert!(
            values.len() <= self.capacity() - self.len,
            "Vector::clone_into_tail: {} values do not fit",
            values.len()
        );

        let base = self.storage.as_mut_ptr();
        let mut len = LenOnDrop::new(&mut self.len);

        for value in values {
            // SAFETY: len.current() < capacity and the slot is past the live prefix.
            unsafe { slot::construct_copy(base.add(len.current()), value) };
            len.increment();
        }
    }

    /// Moves the live elements into a new block of exactly `new_capacity` slots.
    ///
    /// If `new_capacity < len()`, the elements at `new_capacity..len()` are
    /// destroyed and the vector is truncated; this is how capacity is cut
    /// below the live count.
    ///
    /// The new block is acquired before anything else happens, so on error
    /// the vector keeps its elements, length and capacity.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Alloc`] if the new block cannot be allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let mut vector = Vector::from_array([1, 2, 3, 4])?;
    ///
    ///     vector.resize(2)?;
    ///     assert_eq!(vector.as_slice(), &[1, 2]);
    ///     assert_eq!(vector.capacity(), 2);
    ///
    ///     vector.resize(10)?;
    ///     assert_eq!(vector.as_slice(), &[1, 2]);
    ///     assert_eq!(vector.capacity(), 10);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), VectorError> {
        if new_capacity == self.capacity() {
            return Ok(());
        }

        let mut fresh = self.allocate(new_capacity)?;

        self.truncate(new_capacity);

        // SAFETY: the first `len` old slots are live, `len <= new_capacity`,
        // and the fresh block is a different allocation.
        unsafe { slot::move_range(self.storage.as_ptr(), fresh.as_mut_ptr(), self.len) };
        self.storage.swap(&mut fresh);

        // `fresh` now owns the old block, whose slots were all relocated.
        drop(fresh);

        Ok(())
    }

    /// Grows capacity to exactly `new_capacity` if it is larger than the current one.
    ///
    /// Never shrinks; elements and length are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Alloc`] if the new block cannot be allocated.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), VectorError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        self.resize(new_capacity)
    }

    /// Drops unused trailing capacity so that `capacity() == len()`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Alloc`] if the smaller block cannot be allocated.
    pub fn shrink_to_fit(&mut self) -> Result<(), VectorError> {
        self.resize(self.len)
    }

    #[inline]
    fn grow_if_full(&mut self) -> Result<(), VectorError> {
        if self.len < self.capacity() {
            return Ok(());
        }

        let grown = grown_capacity(self.capacity())?;
        self.resize(grown)
    }

    /// Appends `value`, growing to `2 * capacity() + 1` slots when full.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Alloc`] if growth fails; `value` is dropped and
    /// the vector is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let mut vector = Vector::new();
    ///
    ///     vector.push_back('a')?;
    ///     assert_eq!(vector.capacity(), 1);
    ///
    ///     vector.push_back('b')?;
    ///     assert_eq!(vector.capacity(), 3);
    ///
    ///     assert_eq!(vector.as_slice(), &['a', 'b']);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push_back(&mut self, value: T) -> Result<(), VectorError> {
        self.grow_if_full()?;

        // SAFETY: grow_if_full guarantees len < capacity; slot `len` is free.
        unsafe { slot::construct(self.storage.slot_ptr(self.len), value) };
        self.len += 1;

        Ok(())
    }

    /// Builds a `T` from `args` and appends it, returning the new element.
    ///
    /// Shares the growth path of [`push_back`](Self::push_back).
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig::Vector;
    ///
    /// let mut names: Vector<String> = Vector::new();
    /// names.emplace_back("ada").unwrap().push_str(" lovelace");
    ///
    /// assert_eq!(names[0], "ada lovelace");
    /// ```
    pub fn emplace_back<A>(&mut self, args: A) -> Result<&mut T, VectorError>
    where
        A: Into<T>,
    {
        self.emplace_back_with(|| args.into())
    }

    /// Builds a `T` with `make` and appends it, returning the new element.
    ///
    /// `make` runs before any growth, so a panic in it leaves the vector unchanged.
    pub fn emplace_back_with<F>(&mut self, make: F) -> Result<&mut T, VectorError>
    where
        F: FnOnce() -> T,
    {
        let value = make();
        self.push_back(value)?;

        Ok(self.back_mut())
    }

    /// Destroys the last element. Capacity is unchanged.
    ///
    /// Calling this on an empty vector is a contract violation: it panics in
    /// debug builds and does nothing in release builds. Use
    /// [`try_pop_back`](Self::try_pop_back) for a checked variant.
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "Vector::pop_back: called on an empty vector");

        if self.len == 0 {
            return;
        }

        self.len -= 1;
        // SAFETY: slot `len` was the last live slot and is no longer counted.
        unsafe { slot::destroy(self.storage.slot_ptr(self.len)) };
    }

    /// Destroys the last element, or reports [`VectorError::Empty`].
    pub fn try_pop_back(&mut self) -> Result<(), VectorError> {
        if self.is_empty() {
            return Err(VectorError::Empty);
        }

        self.pop_back();
        Ok(())
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot `len` was live; ownership moves to the caller and the
        // slot is now outside the live prefix.
        Some(unsafe { ptr::read(self.storage.slot_ptr(self.len)) })
    }

    /// Destroys every element at `new_len..len()`. Capacity is unchanged.
    ///
    /// No-op if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail = new_len..self.len;
        self.len = new_len;

        // SAFETY: the tail was live and is no longer counted.
        unsafe { slot::destroy_range(self.storage.as_mut_ptr(), tail) };
    }

    /// Destroys every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges contents with `other` in O(1).
    ///
    /// Only block ownership and lengths move; no element is constructed,
    /// copied or destroyed, and no allocation happens.
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Replaces the contents with copies of `source`'s elements.
    ///
    /// Assigning a vector to itself is a no-op. The current block is reused
    /// when it can hold `source.len()` elements; otherwise a block of exactly
    /// `source.len()` slots is allocated first, and only then are the current
    /// elements destroyed.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Alloc`] if a larger block is needed and cannot be
    /// allocated; the vector is unchanged.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), VectorError>
    where
        T: Clone,
    {
        if ptr::eq(self, source) {
            return Ok(());
        }

        if source.len > self.capacity() {
            let fresh = self.allocate(source.len)?;
            self.clear();
            self.storage = fresh;
        } else {
            self.clear();
        }

        self.clone_into_tail(source.as_slice());
        Ok(())
    }

    /// Returns the element at `index`, or [`VectorError::IndexOutOfRange`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig::{Vector, VectorError};
    ///
    /// let vector = Vector::from_array([10, 20]).unwrap();
    ///
    /// assert_eq!(vector.at(1), Ok(&20));
    /// assert_eq!(vector.at(2), Err(VectorError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(VectorError::IndexOutOfRange { index, len })
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, len })
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < len()`. Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "Vector::get_unchecked: index {index} out of range for length {}",
            self.len
        );

        // SAFETY: upheld by caller.
        unsafe { &*self.storage.slot_ptr(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index < len()`. Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "Vector::get_unchecked_mut: index {index} out of range for length {}",
            self.len
        );

        // SAFETY: upheld by caller.
        unsafe { &mut *self.storage.slot_ptr(index) }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "Vector::front: called on an empty vector");
        &self.as_slice()[0]
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "Vector::front_mut: called on an empty vector");
        &mut self.as_mut_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "Vector::back: called on an empty vector");
        &self.as_slice()[self.len - 1]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "Vector::back_mut: called on an empty vector");
        let last = self.len - 1;
        &mut self.as_mut_slice()[last]
    }

    /// Returns a pointer to the first slot.
    ///
    /// Valid until the next operation that may reallocate. Never null.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    ///
    /// Valid until the next operation that may reallocate. Never null.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are live; the pointer is non-null and
        // aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test_utils` feature and allows
    /// injecting allocation failures into every operation that allocates.
    ///
    /// # Example
    ///
    /// ```rust
    /// // test_utils feature required in dev-dependencies
    /// use contig::{StorageBehaviour, Vector};
    ///
    /// let mut vector = Vector::new();
    /// vector.change_behaviour(StorageBehaviour::FailAtAllocate);
    /// assert!(vector.push_back(1u8).is_err());
    ///
    /// vector.change_behaviour(StorageBehaviour::None);
    /// assert!(vector.push_back(1u8).is_ok());
    /// ```
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: StorageBehaviour) {
        self.behaviour = behaviour;
    }
}

/// Capacity after one growth step: `2 * capacity + 1`.
///
/// Reports the current capacity as `CapacityOverflow` if the step does not fit in `usize`.
pub(crate) fn grown_capacity(capacity: usize) -> Result<usize, AllocError> {
    capacity
        .checked_mul(2)
        .and_then(|doubled| doubled.checked_add(1))
        .ok_or(AllocError::CapacityOverflow { capacity })
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        let live = 0..self.len;
        self.len = 0;

        // SAFETY: exactly the first `len` slots were live. The block itself is
        // released afterwards by `RawStorage`'s own drop.
        unsafe { slot::destroy_range(self.storage.as_mut_ptr(), live) };
    }
}
