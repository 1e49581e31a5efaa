// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Largest remainder rounding (Hamilton's method), the primitive that both
//! [`crate::distribute`] and [`crate::reduce`] are built on.

use crate::InlineVec;
use std::cmp::Reverse;

/// Split `budget` across `weights` in proportion, rounding with the largest remainder
/// method, so that the parts always add up to `budget` exactly.
///
/// 1. Each exact share `budget * weight / sum(weights)` is floored. The floor rounds
///    towards negative infinity, so a negative `budget` (a deficit) works too.
/// 2. The units left over, always fewer than `weights.len()`, go one each to the parts
///    with the largest fractional remainder. Ties go to the lower index.
///
/// Remainders are compared as exact integers (they share the denominator
/// `sum(weights)`), so there is no floating point anywhere.
///
/// If no weight is positive there is nothing to be proportional to, and every part is
/// `0`. Callers that consider this an error must check before calling, see
/// [`crate::RatioError::check_ratio_sum`].
///
/// ```
/// use r3bl_ratio::apportion;
///
/// assert_eq!(apportion(10, &[1, 1, 1]).to_vec(), vec![4, 3, 3]);
/// assert_eq!(apportion(10, &[1, 2]).to_vec(), vec![3, 7]);
/// assert_eq!(apportion(-10, &[1, 1, 1]).to_vec(), vec![-3, -3, -4]);
/// ```
#[must_use]
pub fn apportion(budget: i128, weights: &[usize]) -> InlineVec<i128> {
    let total_weight: i128 = weights.iter().copied().map(widen).sum();
    if total_weight == 0 {
        return weights.iter().map(|_| 0).collect();
    }

    let mut parts: InlineVec<i128> = InlineVec::with_capacity(weights.len());
    let mut remainders: InlineVec<(i128, usize)> = InlineVec::with_capacity(weights.len());
    for (index, &weight) in weights.iter().enumerate() {
        let (part, remainder) = scaled_share(budget, weight, total_weight);
        parts.push(part);
        remainders.push((remainder, index));
    }

    let leftover = budget - parts.iter().sum::<i128>();
    remainders.sort_unstable_by_key(|&(remainder, index)| (Reverse(remainder), index));
    for &(_, index) in remainders.iter().take(narrow(leftover)) {
        parts[index] += 1;
    }

    parts
}

/// Floor and remainder of `budget * weight / total_weight`, without ever forming the
/// product `budget * weight` (it can need more than 128 bits).
///
/// With `budget = q * total_weight + r` the share is `q * weight + r * weight /
/// total_weight`, where `0 <= r < total_weight`. The second term is computed by
/// [`mul_div_rem`].
fn scaled_share(budget: i128, weight: usize, total_weight: i128) -> (i128, i128) {
    let quotient = budget.div_euclid(total_weight);
    let remainder = budget.rem_euclid(total_weight);

    let (extra, remainder) = mul_div_rem(
        u128::try_from(remainder).unwrap_or(0),
        u128::try_from(weight).unwrap_or(u128::MAX),
        u128::try_from(total_weight).unwrap_or(u128::MAX),
    );
    let extra = i128::try_from(extra).unwrap_or(i128::MAX);
    let remainder = i128::try_from(remainder).unwrap_or(i128::MAX);

    (
        quotient.saturating_mul(widen(weight)).saturating_add(extra),
        remainder,
    )
}

/// Returns `(a * b / divisor, a * b % divisor)` for `a < divisor < 2^127`, exact even
/// when `a * b` doesn't fit in 128 bits.
fn mul_div_rem(a: u128, b: u128, divisor: u128) -> (u128, u128) {
    if let Some(product) = a.checked_mul(b) {
        return (product / divisor, product % divisor);
    }

    // Shift and add, one bit of `b` at a time, keeping `remainder < divisor`.
    let mut quotient: u128 = 0;
    let mut remainder: u128 = 0;
    for bit in (0..u128::BITS - b.leading_zeros()).rev() {
        quotient <<= 1;
        remainder <<= 1;
        if remainder >= divisor {
            remainder -= divisor;
            quotient += 1;
        }
        if (b >> bit) & 1 == 1 {
            remainder += a;
            if remainder >= divisor {
                remainder -= divisor;
                quotient += 1;
            }
        }
    }
    (quotient, remainder)
}

/// Lossless on every platform Rust supports (`usize` is at most 64 bits).
pub(crate) fn widen(value: usize) -> i128 { i128::try_from(value).unwrap_or(i128::MAX) }

/// Negative values clamp to `0`.
pub(crate) fn narrow(value: i128) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(10, &[1, 1, 1], &[4, 3, 3]; "tie goes to lowest index")]
    #[test_case(110, &[1, 1, 1], &[37, 37, 36]; "two leftover units")]
    #[test_case(10, &[1, 2], &[3, 7]; "largest remainder wins")]
    #[test_case(12, &[1, 3], &[3, 9]; "exact split")]
    #[test_case(7, &[2, 0, 1], &[5, 0, 2]; "zero weight gets nothing")]
    #[test_case(0, &[1, 3], &[0, 0]; "zero budget")]
    #[test_case(5, &[1, 1, 1, 1, 1, 1, 1], &[1, 1, 1, 1, 1, 0, 0]; "budget smaller than slot count")]
    fn test_apportion(budget: i128, weights: &[usize], expected: &[i128]) {
        assert_eq2!(apportion(budget, weights).as_slice(), expected);
    }

    #[test]
    fn test_apportion_negative_budget() {
        let parts = apportion(-10, &[1, 1, 1]);
        assert_eq2!(parts.to_vec(), vec![-3, -3, -4]);
        assert_eq2!(parts.iter().sum::<i128>(), -10);
    }

    #[test]
    fn test_apportion_no_positive_weight() {
        assert_eq2!(apportion(90, &[0, 0, 0]).to_vec(), vec![0, 0, 0]);
        assert!(apportion(90, &[]).is_empty());
    }

    #[test]
    fn test_apportion_does_not_overflow_at_usize_max() {
        // (2^64 - 1)^2 = (2^64 - 2) * 2^64 + 1. The one leftover unit goes to slot 1,
        // whose remainder (2^64 - 1) is the larger.
        let parts = apportion(widen(usize::MAX), &[usize::MAX, 1]);
        assert_eq2!(parts.to_vec(), vec![widen(usize::MAX) - 1, 1]);
        assert_eq2!(parts.iter().sum::<i128>(), widen(usize::MAX));

        let parts = apportion(widen(usize::MAX), &[usize::MAX, usize::MAX]);
        assert_eq2!(parts.iter().sum::<i128>(), widen(usize::MAX));
    }

    #[test]
    fn test_mul_div_rem_wide_product() {
        // Fits in 128 bits.
        assert_eq2!(mul_div_rem(7, 5, 3), (11, 2));
        // (2^125 + 1) * 2^4 = 2^129 + 16, which doesn't.
        assert_eq2!(mul_div_rem((1 << 125) + 1, 1 << 4, 1 << 126), (8, 16));
        assert_eq2!(mul_div_rem((1 << 126) - 1, (1 << 126) - 1, 1 << 126), (
            (1 << 126) - 2,
            1
        ));
    }

    #[test]
    fn test_widen_and_narrow() {
        assert_eq2!(widen(42), 42);
        assert_eq2!(narrow(42), 42);
        assert_eq2!(narrow(-1), 0);
    }
}
