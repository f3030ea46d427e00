// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{Layout, alloc, dealloc};
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::AllocError;

/// Test behaviour for injecting allocation failures.
///
/// This is only available with the `test_utils` feature. Containers built on
/// [`RawStorage`] keep one of these and hand it to `RawStorage::allocate_with`
/// on every allocation, so a test can force the `OutOfMemory` path without
/// exhausting the real allocator.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use contig_storage::{AllocError, RawStorage, StorageBehaviour};
///
/// let result = RawStorage::<u32>::allocate_with(8, StorageBehaviour::FailAtAllocate);
/// assert_eq!(result.unwrap_err(), AllocError::OutOfMemory { bytes: 32 });
///
/// let storage = RawStorage::<u32>::allocate_with(8, StorageBehaviour::None).unwrap();
/// assert_eq!(storage.capacity(), 8);
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every allocation fails with `OutOfMemory`.
    FailAtAllocate,
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for StorageBehaviour {
    fn default() -> Self {
        Self::None
    }
}

/// An owned block of uninitialized slots for values of type `T`.
///
/// `RawStorage` only knows how many slots it has, never which of them are
/// live. Dropping it releases the block without running any destructor; the
/// owner must destroy live values first.
///
/// # Type Parameters
///
/// - `T`: The slot type. Its size and alignment determine the block layout.
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawStorage exclusively owns its block; sending it moves that
// ownership, which is sound whenever the values it may hold are Send.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: shared access only hands out raw pointers; any dereference is the
// owner's responsibility and requires T: Sync to be shared soundly.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    fn layout_for(capacity: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow { capacity })
    }

    /// Creates an empty storage with zero capacity.
    ///
    /// Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates an uninitialized block with room for `capacity` slots.
    ///
    /// No constructor of `T` runs. When the block would be zero bytes long
    /// (zero capacity or a zero-sized `T`) the global allocator is not called
    /// and a dangling, well-aligned pointer stands in for the block.
    ///
    /// # Errors
    ///
    /// - [`AllocError::CapacityOverflow`] if `capacity * size_of::<T>()` exceeds
    ///   `isize::MAX` bytes.
    /// - [`AllocError::OutOfMemory`] if the global allocator returns null.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig_storage::{AllocError, RawStorage};
    ///
    /// let storage = RawStorage::<u8>::allocate(16).unwrap();
    /// assert_eq!(storage.capacity(), 16);
    ///
    /// let too_big = RawStorage::<u64>::allocate(usize::MAX);
    /// assert_eq!(
    ///     too_big.unwrap_err(),
    ///     AllocError::CapacityOverflow { capacity: usize::MAX },
    /// );
    /// ```
    pub fn allocate(capacity: usize) -> Result<Self, AllocError> {
        let layout = Self::layout_for(capacity)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocError::OutOfMemory {
            bytes: layout.size(),
        })?;

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Allocates like [`allocate`](Self::allocate), honouring an injected behaviour.
    ///
    /// With [`StorageBehaviour::FailAtAllocate`] this returns
    /// [`AllocError::OutOfMemory`] without calling the allocator. Layout
    /// validation still runs first, so an overflowing request reports
    /// `CapacityOverflow` regardless of behaviour.
    ///
    /// This is only available with the `test_utils` feature.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn allocate_with(capacity: usize, behaviour: StorageBehaviour) -> Result<Self, AllocError> {
        let layout = Self::layout_for(capacity)?;

        if matches!(behaviour, StorageBehaviour::FailAtAllocate) {
            return Err(AllocError::OutOfMemory {
                bytes: layout.size(),
            });
        }

        Self::allocate(capacity)
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a pointer to slot 0.
    ///
    /// Never null; dangling when no block is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable pointer to slot 0.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to slot `index`.
    ///
    /// Computing the pointer is always safe; reading or writing through it
    /// requires `index < capacity()` and knowledge of whether the slot is live.
    /// `index == capacity()` yields the one-past-the-end pointer.
    #[inline]
    pub fn slot_ptr(&self, index: usize) -> *mut T {
        debug_assert!(
            index <= self.capacity,
            "RawStorage::slot_ptr: index {index} past capacity {}",
            self.capacity
        );

        self.ptr.as_ptr().wrapping_add(index)
    }

    /// Exchanges blocks with `other`. No slot is read or written.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.ptr, &mut other.ptr);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawStorage")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        // The layout was validated when the block was allocated.
        let Ok(layout) = Self::layout_for(self.capacity) else {
            return;
        };

        if layout.size() == 0 {
            return;
        }

        // SAFETY: ptr was returned by `alloc` with exactly this layout and has
        // not been released; live values (if any) are the owner's concern.
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
    }
}
