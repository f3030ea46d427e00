// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocation failures leave the vector exactly as it was.

use contig_storage::{AllocError, StorageBehaviour};

use crate::error::VectorError;
use crate::vector::Vector;

fn failing_vector() -> Vector<u32> {
    let mut vector = Vector::from_array([1, 2, 3]).expect("Failed to from_array(..)");
    vector.change_behaviour(StorageBehaviour::FailAtAllocate);
    vector
}

fn assert_untouched(vector: &Vector<u32>, ptr: *const u32) {
    assert_eq!(vector.as_slice(), &[1, 2, 3]);
    assert_eq!(vector.capacity(), 3);
    assert_eq!(vector.as_ptr(), ptr);
}

#[test]
fn test_push_back_out_of_memory_keeps_state() {
    let mut vector = failing_vector();
    let ptr = vector.as_ptr();

    let result = vector.push_back(4);

    assert_eq!(
        result,
        Err(VectorError::Alloc(AllocError::OutOfMemory { bytes: 28 }))
    );
    assert_untouched(&vector, ptr);
}

#[test]
fn test_emplace_back_out_of_memory_keeps_state() {
    let mut vector = failing_vector();
    let ptr = vector.as_ptr();

    assert!(vector.emplace_back(4u16).is_err());
    assert_untouched(&vector, ptr);
}

#[test]
fn test_resize_truncating_out_of_memory_keeps_elements() {
    let mut vector = failing_vector();
    let ptr = vector.as_ptr();

    assert!(matches!(vector.resize(1), Err(VectorError::Alloc(_))));
    assert_untouched(&vector, ptr);
}

#[test]
fn test_reserve_out_of_memory_keeps_state() {
    let mut vector = failing_vector();
    let ptr = vector.as_ptr();

    assert!(vector.reserve(100).is_err());
    assert_untouched(&vector, ptr);
}

#[test]
fn test_reserve_within_capacity_never_allocates() {
    let mut vector = failing_vector();

    assert!(vector.reserve(2).is_ok());
}

#[test]
fn test_shrink_to_fit_out_of_memory_keeps_state() {
    let mut vector = failing_vector();
    vector.pop_back();
    let ptr = vector.as_ptr();

    assert!(vector.shrink_to_fit().is_err());
    assert_eq!(vector.as_slice(), &[1, 2]);
    assert_eq!(vector.capacity(), 3);
    assert_eq!(vector.as_ptr(), ptr);
}

#[test]
fn test_assign_from_out_of_memory_keeps_destination() {
    let mut vector = failing_vector();
    let ptr = vector.as_ptr();
    let source = Vector::from_array([9, 9, 9, 9, 9]).expect("Failed to from_array(..)");

    assert!(vector.assign_from(&source).is_err());
    assert_untouched(&vector, ptr);
}

#[test]
fn test_assign_from_fitting_source_needs_no_allocation() {
    let mut vector = failing_vector();
    let source = Vector::from_array([8, 9]).expect("Failed to from_array(..)");

    vector.assign_from(&source).expect("Failed to assign_from(..)");

    assert_eq!(vector, [8, 9]);
}

#[test]
fn test_behaviour_is_sticky_until_changed() {
    let mut vector = failing_vector();

    assert!(vector.push_back(4).is_err());
    assert!(vector.push_back(4).is_err());

    vector.change_behaviour(StorageBehaviour::None);
    vector.push_back(4).expect("Failed to push_back(4)");

    assert_eq!(vector, [1, 2, 3, 4]);
    assert_eq!(vector.capacity(), 7);
}

#[test]
fn test_fresh_vectors_do_not_inherit_behaviour() {
    let vector = failing_vector();

    let mut copy = vector.try_clone().expect("Failed to try_clone()");

    copy.push_back(4).expect("Failed to push_back(4)");
    assert_eq!(copy, [1, 2, 3, 4]);
}
