// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::MaybeUninit;

use contig_test_utils::{DropTracker, Tracked};

use crate::slot::{self, LenOnDrop};

fn uninit_slots<V, const N: usize>() -> [MaybeUninit<Tracked<V>>; N] {
    core::array::from_fn(|_| MaybeUninit::uninit())
}

// =============================================================================
// construct() / destroy()
// =============================================================================

#[test]
fn test_construct_then_destroy_runs_destructor_once() {
    let tracker = DropTracker::new();
    let mut slots = uninit_slots::<u8, 1>();
    let ptr = slots[0].as_mut_ptr();

    unsafe { slot::construct(ptr, tracker.track(1)) };
    assert_eq!(tracker.live(), 1);

    unsafe { slot::destroy(ptr) };
    assert_eq!(tracker.dropped(), 1);
    assert_eq!(tracker.live(), 0);
}

// =============================================================================
// construct_copy()
// =============================================================================

#[test]
fn test_construct_copy_leaves_source_intact() {
    let tracker = DropTracker::new();
    let source = tracker.track(String::from("slot"));
    let mut slots = uninit_slots::<String, 1>();
    let ptr = slots[0].as_mut_ptr();

    unsafe { slot::construct_copy(ptr, &source) };

    assert_eq!(tracker.created(), 2);
    assert_eq!(unsafe { (*ptr).get() }, "slot");
    assert_eq!(source.get(), "slot");

    unsafe { slot::destroy(ptr) };
    assert_eq!(tracker.live(), 1);
}

#[test]
fn test_construct_copy_panic_leaves_slot_uninitialized() {
    let tracker = DropTracker::new();
    let source = tracker.track(5u32);
    let mut slots = uninit_slots::<u32, 1>();
    let ptr = slots[0].as_mut_ptr();
    tracker.limit_clones(0);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| unsafe {
        slot::construct_copy(ptr, &source)
    }));

    assert!(result.is_err());
    assert_eq!(tracker.created(), 1);
    assert_eq!(tracker.dropped(), 0);
}

// =============================================================================
// destroy_range()
// =============================================================================

#[test]
fn test_destroy_range_destroys_only_the_range() {
    let tracker = DropTracker::new();
    let mut slots = uninit_slots::<usize, 4>();
    let base = slots.as_mut_ptr().cast::<Tracked<usize>>();

    for index in 0..4 {
        unsafe { slot::construct(base.add(index), tracker.track(index)) };
    }

    unsafe { slot::destroy_range(base, 1..3) };
    assert_eq!(tracker.dropped(), 2);

    unsafe { slot::destroy_range(base, 0..1) };
    unsafe { slot::destroy_range(base, 3..4) };
    assert_eq!(tracker.dropped(), 4);
    assert_eq!(tracker.live(), 0);
}

#[test]
fn test_destroy_range_empty_is_noop() {
    let tracker = DropTracker::new();
    let mut slots = uninit_slots::<u8, 2>();
    let base = slots.as_mut_ptr().cast::<Tracked<u8>>();

    unsafe { slot::destroy_range(base, 1..1) };

    assert_eq!(tracker.dropped(), 0);
}

// =============================================================================
// move_range()
// =============================================================================

#[test]
fn test_move_range_relocates_without_drops() {
    let tracker = DropTracker::new();
    let mut src = uninit_slots::<u8, 3>();
    let mut dst = uninit_slots::<u8, 3>();
    let src_base = src.as_mut_ptr().cast::<Tracked<u8>>();
    let dst_base = dst.as_mut_ptr().cast::<Tracked<u8>>();

    for index in 0..3 {
        unsafe { slot::construct(src_base.add(index), tracker.track(index as u8 * 2)) };
    }

    unsafe { slot::move_range(src_base, dst_base, 3) };

    assert_eq!(tracker.created(), 3);
    assert_eq!(tracker.dropped(), 0);

    let moved: Vec<u8> = (0..3).map(|index| unsafe { *(*dst_base.add(index)).get() }).collect();
    assert_eq!(moved, [0, 2, 4]);

    unsafe { slot::destroy_range(dst_base, 0..3) };
    assert_eq!(tracker.live(), 0);
}

// =============================================================================
// LenOnDrop
// =============================================================================

#[test]
fn test_len_on_drop_publishes_on_scope_exit() {
    let mut len = 2;

    {
        let mut guard = LenOnDrop::new(&mut len);
        assert_eq!(guard.current(), 2);
        guard.increment();
        guard.increment();
    }

    assert_eq!(len, 4);
}

#[test]
fn test_len_on_drop_publishes_on_unwind() {
    let mut len = 0;

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut guard = LenOnDrop::new(&mut len);
        guard.increment();
        panic!("construction failed");
    }));

    assert!(result.is_err());
    assert_eq!(len, 1);
}
