// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Builds a [`Vector`](crate::Vector) from a literal list or a fill value.
///
/// Allocation is fallible, so the macro evaluates to
/// `Result<Vector<T>, VectorError>`.
///
/// - `vector![]` - empty, no allocation.
/// - `vector![a, b, c]` - moves each value in order; `capacity() == len()`.
/// - `vector![value; n]` - `n` copies of `value`; `capacity() == n`.
///
/// # Example
///
/// ```rust
/// use contig::{VectorError, vector};
///
/// fn example() -> Result<(), VectorError> {
///     let listed = vector![1, 2, 3]?;
///     assert_eq!(listed.as_slice(), &[1, 2, 3]);
///
///     let filled = vector![7; 3]?;
///     assert_eq!(filled.as_slice(), &[7, 7, 7]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        ::core::result::Result::<_, $crate::VectorError>::Ok($crate::Vector::new())
    };
    ($value:expr; $len:expr) => {{
        let value = $value;
        $crate::Vector::from_elem($len, value)
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::Vector::from_array([$($value),+])
    };
}
