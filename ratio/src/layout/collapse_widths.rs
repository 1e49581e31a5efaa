// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RatioError, RatioResult, reduce};

/// Shrink table column `widths` until they fit in `max_width`, taking space only from
/// the columns whose entry in `wrapable` is `true` (their content can wrap onto more
/// lines).
///
/// Each pass takes space from the widest wrapable column(s) only, bringing them down
/// towards the next widest wrapable width, and shares the cut between them with
/// [`reduce`]. Passes repeat until the table fits or every wrapable column has been
/// squeezed to the same width as the rest, with nothing left to take.
///
/// If no column is wrapable, `widths` comes back unchanged, and the table still doesn't
/// fit. That is for the caller to deal with.
///
/// ```
/// use r3bl_ratio::collapse_widths;
///
/// let widths = collapse_widths(&[10, 20, 30], &[true, true, true], 40)?;
/// assert_eq!(widths, vec![10, 15, 15]);
/// # Ok::<(), r3bl_ratio::RatioError>(())
/// ```
///
/// # Errors
///
/// [`RatioError::LengthMismatch`] if `wrapable` doesn't have one entry per column.
pub fn collapse_widths(
    widths: &[usize],
    wrapable: &[bool],
    max_width: usize,
) -> RatioResult<Vec<usize>> {
    RatioError::check_len("wrapable flags", widths.len(), wrapable.len())?;

    let mut widths = widths.to_vec();
    if !wrapable.iter().any(|&it| it) {
        return Ok(widths);
    }

    let mut total_width: usize = widths.iter().sum();
    while total_width > max_width {
        let excess_width = total_width - max_width;
        let widest = widest_wrapable(&widths, wrapable, |_| true);
        let next_widest = widest_wrapable(&widths, wrapable, |width| width != widest);
        let column_difference = widest - next_widest;
        if column_difference == 0 {
            break;
        }

        let ratios: Vec<usize> = widths
            .iter()
            .zip(wrapable)
            .map(|(&width, &wrap)| usize::from(wrap && width == widest))
            .collect();
        let max_reduce = vec![excess_width.min(column_difference); widths.len()];

        // Zero ratio columns come back as their current width.
        let reduced = reduce(excess_width, &ratios, &max_reduce, &widths)?;
        widths = widths
            .iter()
            .zip(&ratios)
            .zip(reduced)
            .map(|((&width, &ratio), it)| {
                if ratio > 0 {
                    width.saturating_sub(it)
                } else {
                    it
                }
            })
            .collect();

        total_width = widths.iter().sum();
        tracing::debug!(
            message = "collapse widest columns",
            excess_width,
            total_width,
            widths = ?widths
        );
    }

    Ok(widths)
}

fn widest_wrapable(
    widths: &[usize],
    wrapable: &[bool],
    include: impl Fn(usize) -> bool,
) -> usize {
    widths
        .iter()
        .zip(wrapable)
        .filter(|&(&width, &wrap)| wrap && include(width))
        .map(|(&width, _)| width)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(&[10, 20, 30], &[true, true, true], 40, &[10, 15, 15]; "widest first then pairs")]
    #[test_case(&[20, 20, 20], &[true, true, true], 30, &[10, 10, 10]; "equal widths shrink together")]
    #[test_case(&[30, 30], &[false, true], 40, &[30, 10]; "only wrapable columns shrink")]
    #[test_case(&[50, 50], &[false, false], 40, &[50, 50]; "nothing wrapable")]
    #[test_case(&[10, 20], &[true, true], 40, &[10, 20]; "already fits")]
    #[test_case(&[30, 5], &[true, false], 4, &[0, 5]; "squeezed to nothing")]
    fn test_collapse_widths(
        widths: &[usize],
        wrapable: &[bool],
        max_width: usize,
        expected: &[usize],
    ) {
        assert_eq2!(
            collapse_widths(widths, wrapable, max_width).unwrap(),
            expected.to_vec()
        );
    }

    #[test]
    fn test_collapse_widths_length_mismatch() {
        assert_eq2!(
            collapse_widths(&[10, 20], &[true], 5),
            Err(RatioError::LengthMismatch {
                what: "wrapable flags",
                expected: 2,
                actual: 1,
            })
        );
    }
}
