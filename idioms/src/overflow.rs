// overflow.rs - Silent wrap-around versus failing fast

use std::ops::Range;

use crate::error::OverflowError;

/// Sums with two's-complement wrapping; never fails, may be wrong.
pub fn wrapping_sum(range: Range<i32>) -> i32 {
    range.fold(0i32, i32::wrapping_add)
}

/// Sums and reports the first addend that overflows `i32`.
pub fn checked_sum(mut range: Range<i32>) -> Result<i32, OverflowError> {
    range.try_fold(0i32, |acc, x| acc.checked_add(x).ok_or(OverflowError { at: x }))
}
