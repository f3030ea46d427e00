// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous vector with explicit slot lifecycle.
//!
//! `Vector<T>` keeps raw storage and element lifetimes apart. Its block, a
//! [`RawStorage<T>`](contig_storage::RawStorage), holds `capacity()` slots
//! that are never touched as `T` on their own; the vector constructs and
//! destroys values in place and tracks the live prefix with `len()`.
//!
//! # Core Guarantees
//!
//! - **Live prefix only**: slots `0..len()` hold valid values, slots past it are
//!   never read, copied or destroyed.
//! - **Fallible growth**: every allocating operation returns
//!   [`VectorError::Alloc`] instead of aborting, and leaves the vector as it was.
//! - **Amortized doubling**: a full vector grows to `2 * capacity() + 1` slots.
//! - **Exact reshaping**: `resize`, `reserve` and `shrink_to_fit` set capacity to
//!   the requested value, truncating if it falls below `len()`.
//! - **Value semantics**: clones and assignments are deep; `swap` is O(1) and
//!   touches no element.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use contig::{VectorError, vector};
//!
//! fn example() -> Result<(), VectorError> {
//!     let mut numbers = vector![1, 2, 3]?;
//!     assert_eq!(numbers.len(), 3);
//!     assert_eq!(numbers[0], 1);
//!
//!     numbers.push_back(4)?;
//!     assert_eq!(numbers[3], 4);
//!     assert!(numbers.capacity() >= 4);
//!
//!     assert!(numbers.at(10).is_err());
//!
//!     numbers.pop_back();
//!     numbers.pop_back();
//!     assert_eq!(numbers, [1, 2]);
//!
//!     let capacity = numbers.capacity();
//!     numbers.clear();
//!     assert!(numbers.is_empty());
//!     assert_eq!(numbers.capacity(), capacity);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Value Semantics
//!
//! ```rust
//! use contig::{VectorError, vector};
//!
//! fn example() -> Result<(), VectorError> {
//!     let a = vector![7; 3]?;
//!     let mut b = a.try_clone()?;
//!
//!     b[0] = 9;
//!     assert_eq!(a[0], 7);
//!     assert_ne!(a, b);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! contig = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`StorageBehaviour`] to drive the `OutOfMemory` paths of your code:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use contig::{StorageBehaviour, Vector};
//!
//!     #[test]
//!     fn test_handles_out_of_memory() {
//!         let mut vector = Vector::new();
//!         vector.change_behaviour(StorageBehaviour::FailAtAllocate);
//!
//!         assert!(vector.push_back(1u8).is_err());
//!         assert!(vector.is_empty());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod macros;
mod slot;
mod traits;
mod vector;

#[cfg(test)]
mod tests;

pub use contig_storage::AllocError;
pub use error::VectorError;
pub use vector::Vector;

#[cfg(any(test, feature = "test_utils"))]
pub use contig_storage::StorageBehaviour;
