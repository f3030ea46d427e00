// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for contig crates.
//!
//! - [`DropTracker`] / [`Tracked`]: instrumented values that count their own
//!   constructions and destructions, so a test can prove every value a
//!   container built was destroyed exactly once.
//! - [`index_permutations`] / [`apply_permutation`]: exhaustive orderings for
//!   comparison tests.
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;
mod tracked;

pub use permutations::{apply_permutation, index_permutations};
pub use tracked::{DropTracker, Tracked};
