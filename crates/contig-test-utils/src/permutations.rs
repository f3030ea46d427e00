// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive testing.

/// Calls `callback` once for every ordering of `[0, 1, ..., len - 1]`.
///
/// Uses the iterative form of Heap's algorithm; the identity ordering is
/// always visited first. `len == 0` visits nothing.
///
/// # Example
/// ```
/// use contig_test_utils::index_permutations;
///
/// let mut seen = Vec::new();
/// index_permutations(3, |perm| seen.push(perm.to_vec()));
///
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[0], [0, 1, 2]);
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut indices: Vec<usize> = (0..len).collect();
    let mut counters = vec![0usize; len];

    callback(&indices);

    let mut level = 1;
    while level < len {
        if counters[level] < level {
            let other = if level % 2 == 0 { 0 } else { counters[level] };
            indices.swap(other, level);
            callback(&indices);

            counters[level] += 1;
            level = 1;
        } else {
            counters[level] = 0;
            level += 1;
        }
    }
}

/// Reorders `slice` so that position `i` receives the element previously at `perm[i]`.
///
/// # Panics
///
/// Panics if `perm.len() != slice.len()`.
///
/// # Example
/// ```
/// use contig_test_utils::apply_permutation;
///
/// let mut letters = ['a', 'b', 'c', 'd'];
/// apply_permutation(&mut letters, &[3, 2, 1, 0]);
/// assert_eq!(letters, ['d', 'c', 'b', 'a']);
/// ```
pub fn apply_permutation<T>(slice: &mut [T], perm: &[usize]) {
    assert_eq!(
        slice.len(),
        perm.len(),
        "apply_permutation: permutation length mismatch"
    );

    let mut placed = vec![false; slice.len()];

    for start in 0..slice.len() {
        if placed[start] {
            continue;
        }

        // Walk the cycle through `start`, pulling each source into place.
        let mut current = start;
        loop {
            placed[current] = true;
            let source = perm[current];
            if source == start {
                break;
            }

            slice.swap(current, source);
            current = source;
        }
    }
}
