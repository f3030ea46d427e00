// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Standard trait impls for `Vector`.

use alloc::alloc::{Layout, handle_alloc_error};
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};

use contig_storage::AllocError;

use crate::error::VectorError;
use crate::vector::Vector;

#[cold]
#[inline(never)]
fn clone_failed<T>(len: usize, error: VectorError) -> ! {
    if let VectorError::Alloc(AllocError::OutOfMemory { .. }) = error {
        if let Ok(layout) = Layout::array::<T>(len) {
            handle_alloc_error(layout);
        }
    }

    panic!("Vector::clone: {error}");
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Deep copy. Allocation failure goes through `handle_alloc_error`;
    /// use [`Vector::try_clone`] to observe it as an error instead.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(vector) => vector,
            Err(error) => clone_failed::<T>(self.len(), error),
        }
    }

    /// Copy-assignment; see [`Vector::assign_from`].
    fn clone_from(&mut self, source: &Self) {
        if let Err(error) = self.assign_from(source) {
            clone_failed::<T>(source.len(), error);
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len(),
            "Vector::index: index {index} out of range for length {}",
            self.len()
        );

        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len(),
            "Vector::index_mut: index {index} out of range for length {}",
            self.len()
        );

        &mut self.as_mut_slice()[index]
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    /// Equal iff same length and pairwise-equal elements. Capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
