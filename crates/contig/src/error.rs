// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for contig.

use contig_storage::AllocError;
use thiserror::Error;

/// Error type for `Vector` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum VectorError {
    /// A new storage block could not be acquired.
    ///
    /// The vector is left exactly as it was before the failing call.
    #[error("allocation failed: {0}")]
    Alloc(#[from] AllocError),

    /// Checked access past the live elements.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length at the time of the call.
        len: usize,
    },

    /// Checked removal from an empty vector.
    #[error("vector is empty")]
    Empty,
}
