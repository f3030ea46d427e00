// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw slot storage for contiguous containers.
//!
//! [`RawStorage<T>`] owns one heap block sized for `capacity` values of `T` and
//! nothing else. It never runs a constructor or destructor of `T`: every slot is
//! uninitialized as far as the storage is concerned, and tracking which slots
//! hold live values is entirely the owner's job.
//!
//! # Guarantees
//!
//! - **No hidden construction**: allocating a block of `n` slots touches no `T`.
//! - **No partial state**: a failed [`RawStorage::allocate`] returns an
//!   [`AllocError`] and frees nothing.
//! - **Zero-cost empty state**: zero capacity and zero-sized `T` never reach the
//!   global allocator.
//!
//! # Example
//!
//! ```rust
//! use contig_storage::{AllocError, RawStorage};
//!
//! fn example() -> Result<(), AllocError> {
//!     let mut storage = RawStorage::<u64>::allocate(4)?;
//!     assert_eq!(storage.capacity(), 4);
//!
//!     // SAFETY: slot 0 is in bounds and uninitialized; u64 has no destructor.
//!     unsafe {
//!         storage.slot_ptr(0).write(7);
//!         assert_eq!(storage.slot_ptr(0).read(), 7);
//!     }
//!
//!     // Dropping the storage releases the block without touching slot 0.
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to simulate allocator exhaustion:
//!
//! ```toml
//! [dev-dependencies]
//! contig-storage = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then pass a [`StorageBehaviour`] to `RawStorage::allocate_with`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod raw_storage;

#[cfg(test)]
mod tests;

pub use error::AllocError;
pub use raw_storage::RawStorage;

#[cfg(any(test, feature = "test_utils"))]
pub use raw_storage::StorageBehaviour;
