// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Slot lifecycle: the only place a slot changes between uninitialized and live.
//!
//! Every helper takes raw slot pointers into a `RawStorage` block. Callers own
//! the bookkeeping of which slots are live; these functions only perform the
//! transition they are named after.

use core::ops::Range;
use core::ptr;

/// Moves `value` into an uninitialized slot, making it live.
///
/// # Safety
///
/// `slot` must be valid for writes, properly aligned and currently
/// uninitialized. A live value already in `slot` would be leaked.
#[inline]
pub(crate) unsafe fn construct<T>(slot: *mut T, value: T) {
    // SAFETY: upheld by caller.
    unsafe { ptr::write(slot, value) }
}

/// Constructs a copy of `value` in an uninitialized slot.
///
/// If `T::clone` panics the slot stays uninitialized.
///
/// # Safety
///
/// Same as [`construct`].
#[inline]
pub(crate) unsafe fn construct_copy<T: Clone>(slot: *mut T, value: &T) {
    let copy = value.clone();
    // SAFETY: upheld by caller.
    unsafe { construct(slot, copy) }
}

/// Runs the destructor of a live slot, leaving it uninitialized.
///
/// # Safety
///
/// `slot` must hold a live value that is not used again afterwards.
#[inline]
pub(crate) unsafe fn destroy<T>(slot: *mut T) {
    // SAFETY: upheld by caller.
    unsafe { ptr::drop_in_place(slot) }
}

/// Destroys the live run `base[range]`.
///
/// If one destructor panics the remaining values in the run are still
/// destroyed while unwinding.
///
/// # Safety
///
/// Every slot in `range` must be live and must not be used again afterwards.
/// Callers shrink their tracked length *before* calling, so a panicking
/// destructor can never lead to a second destruction.
#[inline]
pub(crate) unsafe fn destroy_range<T>(base: *mut T, range: Range<usize>) {
    if range.is_empty() {
        return;
    }

    // SAFETY: upheld by caller; the run is contiguous inside one block.
    unsafe {
        let run = ptr::slice_from_raw_parts_mut(base.add(range.start), range.len());
        ptr::drop_in_place(run);
    }
}

/// Relocates `count` live values from `src` to the uninitialized slots at `dst`.
///
/// A move is a bitwise copy, so this cannot fail part way. Afterwards the
/// values are live at `dst` and the `src` slots are uninitialized; their
/// destructors must not run.
///
/// # Safety
///
/// `src[..count]` must be live, `dst[..count]` uninitialized and writable, and
/// the two runs must not overlap.
#[inline]
pub(crate) unsafe fn move_range<T>(src: *const T, dst: *mut T, count: usize) {
    // SAFETY: upheld by caller.
    unsafe { ptr::copy_nonoverlapping(src, dst, count) }
}

/// Publishes a locally tracked length when dropped.
///
/// Bulk construction bumps the local count after each slot becomes live. If
/// constructing the next value panics, the guard still writes back how many
/// slots are live, so the owner destroys exactly that prefix.
pub(crate) struct LenOnDrop<'a> {
    len: &'a mut usize,
    local: usize,
}

impl<'a> LenOnDrop<'a> {
    #[inline]
    pub(crate) fn new(len: &'a mut usize) -> Self {
        let local = *len;
        Self { len, local }
    }

    #[inline]
    pub(crate) fn current(&self) -> usize {
        self.local
    }

    #[inline]
    pub(crate) fn increment(&mut self) {
        self.local += 1;
    }
}

impl Drop for LenOnDrop<'_> {
    #[inline]
    fn drop(&mut self) {
        *self.len = self.local;
    }
}
