// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::apportion::{narrow, widen};
use crate::{InlineVec, RatioError, RatioResult, apportion};

/// Split `total` cells across slots in proportion to `ratios`, optionally keeping every
/// slot at or above its entry in `maybe_minimums`.
///
/// Without minimums the sizes add up to exactly `total`, and each size is within one
/// cell of its exact share `total * ratio / sum(ratios)`. See [`apportion`] for the
/// rounding.
///
/// With minimums, fix-up passes run until every slot is satisfied:
/// 1. Split the remaining budget across the remaining slots.
/// 2. Every slot whose share is below its minimum is pinned at its minimum, and leaves
///    the pool along with its ratio. Its minimum comes out of the remaining budget.
/// 3. If anything was pinned, go to 1. At least one slot leaves the pool per pass, so
///    there are at most `ratios.len()` passes.
///
/// When the minimums alone add up to more than `total` every slot ends up pinned, and
/// the sizes add up to more than `total`. That overflow is intentional.
///
/// ```
/// use r3bl_ratio::distribute;
///
/// assert_eq!(distribute(110, &[1, 1, 1], None)?, vec![37, 37, 36]);
/// assert_eq!(distribute(110, &[1, 1, 1], Some(&[50, 1, 1]))?, vec![50, 30, 30]);
/// assert_eq!(distribute(20, &[1, 1], Some(&[15, 15]))?, vec![15, 15]);
/// # Ok::<(), r3bl_ratio::RatioError>(())
/// ```
///
/// # Errors
///
/// - [`RatioError::ZeroRatioSum`] if no ratio is positive (including no ratios at all).
/// - [`RatioError::LengthMismatch`] if `maybe_minimums` doesn't have one entry per ratio.
pub fn distribute(
    total: usize,
    ratios: &[usize],
    maybe_minimums: Option<&[usize]>,
) -> RatioResult<Vec<usize>> {
    if let Some(minimums) = maybe_minimums {
        RatioError::check_len("minimums", ratios.len(), minimums.len())?;
    }
    RatioError::check_ratio_sum(ratios)?;

    let minimum_at = |index: usize| maybe_minimums.map_or(0, |minimums| minimums[index]);

    Ok(distribute_budget(widen(total), ratios, minimum_at))
}

/// Does the work for [`distribute`], with preconditions already checked. The `budget`
/// is signed since [`crate::resolve`] may pass in a deficit (fixed sizes larger than
/// the total). A slot's share is never allowed below `max(0, minimum)`, so the sizes are
/// non-negative even then.
pub(crate) fn distribute_budget(
    budget: i128,
    ratios: &[usize],
    minimum_at: impl Fn(usize) -> usize,
) -> Vec<usize> {
    let mut sizes = vec![0; ratios.len()];
    let mut active: InlineVec<usize> = (0..ratios.len()).collect();
    let mut remaining_budget = budget;

    while !active.is_empty() {
        let weights: InlineVec<usize> = active.iter().map(|&index| ratios[index]).collect();
        let shares = apportion(remaining_budget, &weights);

        let below_minimum: InlineVec<usize> = active
            .iter()
            .zip(shares.iter())
            .filter(|&(&index, &share)| share < widen(minimum_at(index)))
            .map(|(&index, _)| index)
            .collect();

        if below_minimum.is_empty() {
            for (&index, &share) in active.iter().zip(shares.iter()) {
                sizes[index] = narrow(share);
            }
            break;
        }

        // % is Display, ? is Debug.
        tracing::trace!(
            message = "pin slots below their minimum",
            remaining_budget = %remaining_budget,
            pinned = ?below_minimum
        );

        for &index in &below_minimum {
            let minimum = minimum_at(index);
            sizes[index] = minimum;
            remaining_budget -= widen(minimum);
        }
        active.retain(|index| !below_minimum.contains(index));
    }

    sizes
}
