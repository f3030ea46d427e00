// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for contig-storage.

use thiserror::Error;

/// Errors raised while acquiring a storage block.
///
/// No variant ever leaves partial state behind: when allocation fails, the
/// caller's existing block is untouched.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The requested slot count does not fit in `isize::MAX` bytes.
    #[error("capacity overflow: {capacity} slots exceed the addressable size")]
    CapacityOverflow {
        /// Requested number of slots.
        capacity: usize,
    },

    /// The global allocator could not satisfy the request.
    #[error("out of memory: failed to allocate {bytes} bytes")]
    OutOfMemory {
        /// Size of the rejected request in bytes.
        bytes: usize,
    },
}
