// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{LayoutDirection, Region};
use crate::{InlineVec, RatioResult, Slot, resolve};

/// Split `region` into one sub region per slot, laid out one after another along `dir`.
///
/// The main axis extent (width for [`LayoutDirection::Horizontal`], height for
/// [`LayoutDirection::Vertical`]) is handed out by [`resolve`]. Each sub region starts at
/// the insertion position left by the previous one, and keeps the cross axis of
/// `region`. If the minimum sizes overflow the region, the last sub regions extend past
/// its edge, and it is up to the renderer to clip them.
///
/// ```
/// use r3bl_ratio::{LayoutDirection, Region, slot, split_region};
///
/// let regions = split_region(
///     Region::new(0, 0, 100, 30),
///     LayoutDirection::Horizontal,
///     &[slot!(fixed: 20), slot!(ratio: 1)],
/// )?;
/// assert_eq!(regions[0], Region::new(0, 0, 20, 30));
/// assert_eq!(regions[1], Region::new(20, 0, 80, 30));
/// # Ok::<(), r3bl_ratio::RatioError>(())
/// ```
///
/// # Errors
///
/// Whatever [`resolve`] returns for `slots`.
pub fn split_region(
    region: Region,
    dir: LayoutDirection,
    slots: &[Slot],
) -> RatioResult<InlineVec<Region>> {
    let sizes = resolve(region.main_axis_extent(dir), slots)?;

    let mut insertion_offset: usize = 0;
    let regions = sizes
        .into_iter()
        .map(|extent| {
            let it = region.slice_main_axis(dir, insertion_offset, extent);
            insertion_offset = insertion_offset.saturating_add(extent);
            it
        })
        .collect();

    Ok(regions)
}
