// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{apportion::widen, distribute::distribute_budget};
use crate::{InlineVec, RatioError, RatioResult, Slot};

/// Work out how many cells each of `slots` gets out of `total`. This is the entry point
/// a layout uses.
///
/// 1. Every slot with a fixed [`Slot::size`] gets exactly that size.
/// 2. The fixed sizes are taken out of `total`. What is left (possibly a deficit, if
///    the fixed sizes add up to more than `total`) is split across the flexible slots by
///    [`crate::distribute`], using their ratios and minimum sizes.
/// 3. The sizes come back in the same order as `slots`.
///
/// If every slot is fixed, step 2 is skipped and whatever is left over goes unused.
/// Flexible slots always get at least their minimum size, even out of a deficit, so the
/// sizes can add up to more than `total`.
///
/// ```
/// use r3bl_ratio::{resolve, slot};
///
/// assert_eq!(
///     resolve(110, &[slot!(fixed: 20), slot!(ratio: 1), slot!(ratio: 1)])?,
///     vec![20, 45, 45]
/// );
/// assert_eq!(
///     resolve(20, &[slot!(ratio: 1, min: 50), slot!(ratio: 1)])?,
///     vec![50, 1]
/// );
/// # Ok::<(), r3bl_ratio::RatioError>(())
/// ```
///
/// # Errors
///
/// [`RatioError::ZeroRatioSum`] if there are flexible slots and none of them has a
/// positive ratio.
pub fn resolve(total: usize, slots: &[Slot]) -> RatioResult<Vec<usize>> {
    let mut sizes: Vec<usize> = slots.iter().map(|slot| slot.size.unwrap_or(0)).collect();

    let flexible: InlineVec<usize> = slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| !slot.is_fixed())
        .map(|(index, _)| index)
        .collect();
    if flexible.is_empty() {
        return Ok(sizes);
    }

    let ratios: InlineVec<usize> = flexible.iter().map(|&index| slots[index].ratio).collect();
    RatioError::check_ratio_sum(&ratios)?;

    let fixed_total: i128 = slots.iter().filter_map(|slot| slot.size).map(widen).sum();
    let budget = widen(total) - fixed_total;

    let flexible_sizes = distribute_budget(budget, &ratios, |position| {
        slots[flexible[position]].minimum_size
    });
    for (&index, size) in flexible.iter().zip(flexible_sizes) {
        sizes[index] = size;
    }

    Ok(sizes)
}
