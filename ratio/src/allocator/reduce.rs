// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::apportion::{narrow, widen};
use crate::{InlineVec, RatioError, RatioResult, apportion};

/// Split `total` across the slots with a positive ratio, never giving a slot more than
/// its entry in `maximums`. This is the mirror image of [`crate::distribute`], used when
/// sizes that were already computed have to shrink: `total` is how much needs to be
/// taken away, and `maximums` is how much each slot can still give up.
///
/// - A slot with `ratio > 0` gets its proportional share (see [`apportion`]), capped at
///   its maximum. Capped slots leave the pool and the rest of `total` is split again
///   across the remaining slots, until no share is over its cap.
/// - A slot with `ratio == 0` takes no part, and its output is its entry in `values`,
///   as is.
///
/// If the caps are too tight to absorb all of `total`, the surplus is dropped and the
/// output adds up to less than `total`. If no ratio is positive, the output is `values`.
///
/// ```
/// use r3bl_ratio::reduce;
///
/// assert_eq!(
///     reduce(110, &[1, 1, 1], &[10, 10, 10], &[20, 20, 20])?,
///     vec![10, 10, 10]
/// );
/// assert_eq!(reduce(10, &[1, 1, 0], &[2, 100, 0], &[0, 0, 7])?, vec![2, 8, 7]);
/// # Ok::<(), r3bl_ratio::RatioError>(())
/// ```
///
/// # Errors
///
/// [`RatioError::LengthMismatch`] if `maximums` or `values` doesn't have one entry per
/// ratio.
pub fn reduce(
    total: usize,
    ratios: &[usize],
    maximums: &[usize],
    values: &[usize],
) -> RatioResult<Vec<usize>> {
    RatioError::check_len("maximums", ratios.len(), maximums.len())?;
    RatioError::check_len("values", ratios.len(), values.len())?;

    let mut sizes = values.to_vec();
    let mut active: InlineVec<usize> = (0..ratios.len())
        .filter(|&index| ratios[index] > 0)
        .collect();
    let mut remaining_total = total;

    while !active.is_empty() {
        let weights: InlineVec<usize> = active.iter().map(|&index| ratios[index]).collect();
        let shares = apportion(widen(remaining_total), &weights);

        let above_maximum: InlineVec<usize> = active
            .iter()
            .zip(shares.iter())
            .filter(|&(&index, &share)| share > widen(maximums[index]))
            .map(|(&index, _)| index)
            .collect();

        if above_maximum.is_empty() {
            for (&index, &share) in active.iter().zip(shares.iter()) {
                sizes[index] = narrow(share);
            }
            break;
        }

        // % is Display, ? is Debug.
        tracing::trace!(
            message = "pin slots above their maximum",
            remaining_total = %remaining_total,
            pinned = ?above_maximum
        );

        for &index in &above_maximum {
            sizes[index] = maximums[index];
            remaining_total = remaining_total.saturating_sub(maximums[index]);
        }
        active.retain(|index| !above_maximum.contains(index));
    }

    Ok(sizes)
}
