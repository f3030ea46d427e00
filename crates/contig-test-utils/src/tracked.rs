// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Construction and destruction accounting for container tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
struct Counters {
    created: AtomicUsize,
    dropped: AtomicUsize,
    clones_left: AtomicUsize,
}

/// Shared counters for every [`Tracked`] value it hands out.
///
/// Cloning the tracker shares the counters, so a test can keep one handle
/// while the values it produced travel through a container.
///
/// # Example
///
/// ```rust
/// use contig_test_utils::DropTracker;
///
/// let tracker = DropTracker::new();
/// let a = tracker.track(1);
/// let b = a.clone();
///
/// assert_eq!(tracker.created(), 2);
/// drop(a);
/// drop(b);
/// assert_eq!(tracker.dropped(), 2);
/// assert_eq!(tracker.live(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct DropTracker(Arc<Counters>);

impl DropTracker {
    /// Creates a tracker with zeroed counters and an unlimited clone budget.
    pub fn new() -> Self {
        Self(Arc::new(Counters {
            created: AtomicUsize::new(0),
            dropped: AtomicUsize::new(0),
            clones_left: AtomicUsize::new(usize::MAX),
        }))
    }

    /// Wraps `value` so its lifecycle is counted by this tracker.
    pub fn track<V>(&self, value: V) -> Tracked<V> {
        self.0.created.fetch_add(1, Ordering::SeqCst);

        Tracked {
            value,
            tracker: self.clone(),
        }
    }

    /// Allows `budget` more successful clones; the next one panics.
    ///
    /// Used to simulate a copy constructor failing partway through a bulk copy.
    pub fn limit_clones(&self, budget: usize) {
        self.0.clones_left.store(budget, Ordering::SeqCst);
    }

    /// Number of values constructed, by `track` or by cloning.
    pub fn created(&self) -> usize {
        self.0.created.load(Ordering::SeqCst)
    }

    /// Number of values destroyed.
    pub fn dropped(&self) -> usize {
        self.0.dropped.load(Ordering::SeqCst)
    }

    /// Number of values currently alive.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than created, which means some
    /// value was destroyed twice.
    pub fn live(&self) -> usize {
        self.created()
            .checked_sub(self.dropped())
            .expect("DropTracker::live: more drops than constructions (double drop)")
    }
}

impl Default for DropTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A value whose construction, cloning and destruction are counted.
#[derive(Debug)]
pub struct Tracked<V> {
    value: V,
    tracker: DropTracker,
}

impl<V> Tracked<V> {
    /// Returns the wrapped value.
    pub fn get(&self) -> &V {
        &self.value
    }
}

impl<V: Clone> Clone for Tracked<V> {
    fn clone(&self) -> Self {
        let counters = &self.tracker.0;
        let granted = counters
            .clones_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1));

        if granted.is_err() {
            panic!("Tracked::clone: clone budget exhausted");
        }

        self.tracker.track(self.value.clone())
    }
}

impl<V: PartialEq> PartialEq for Tracked<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq> Eq for Tracked<V> {}

impl<V> Drop for Tracked<V> {
    fn drop(&mut self) {
        self.tracker.0.dropped.fetch_add(1, Ordering::SeqCst);
    }
}
