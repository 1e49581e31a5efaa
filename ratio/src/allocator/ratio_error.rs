// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors returned by the allocators. See [`RatioError`] for details.

/// Convenience type alias for the result of every fallible allocator in this crate.
///
/// [`RatioError`] implements [`miette::Diagnostic`], so `?` converts it into a
/// [`miette::Report`] when the caller works with [`miette::Result`].
pub type RatioResult<T> = Result<T, RatioError>;

/// Precondition violations. An allocator either returns a complete list of sizes or one
/// of these, never a partial or degenerate result.
///
/// Running out of space is *not* an error. Minimums that add up to more than the total,
/// or maximums that add up to less, produce sizes that overflow or fall short, and the
/// caller decides what to do about it.
///
/// | Variant              | Cause                                                      |
/// | :------------------- | :--------------------------------------------------------- |
/// | [`ZeroRatioSum`]     | A proportional split was asked for with no positive weight |
/// | [`LengthMismatch`]   | Two parallel input lists have different lengths            |
///
/// [`ZeroRatioSum`]: Self::ZeroRatioSum
/// [`LengthMismatch`]: Self::LengthMismatch
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum RatioError {
    /// Every ratio is `0` (or there are no ratios at all), so there is nothing to be
    /// proportional to.
    #[error("Can't split space across {slot_count} slot(s) when no ratio is positive")]
    #[diagnostic(
        code(r3bl_ratio::zero_ratio_sum),
        help(
            "Give at least one flexible slot a ratio greater than 0, \
             or give every slot a fixed size"
        )
    )]
    ZeroRatioSum { slot_count: usize },

    /// A list that must have one entry per ratio doesn't.
    #[error("Expected {expected} {what}, got {actual}")]
    #[diagnostic(
        code(r3bl_ratio::length_mismatch),
        help("Pass exactly one entry per ratio, in the same order")
    )]
    LengthMismatch {
        /// Which list is the wrong length, eg `"minimums"`.
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl RatioError {
    /// # Errors
    ///
    /// Returns [`RatioError::ZeroRatioSum`] if no ratio is positive.
    pub fn check_ratio_sum(ratios: &[usize]) -> RatioResult<()> {
        if ratios.iter().any(|&ratio| ratio > 0) {
            Ok(())
        } else {
            Err(RatioError::ZeroRatioSum {
                slot_count: ratios.len(),
            })
        }
    }

    /// # Errors
    ///
    /// Returns [`RatioError::LengthMismatch`] if `expected != actual`.
    pub fn check_len(what: &'static str, expected: usize, actual: usize) -> RatioResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(RatioError::LengthMismatch {
                what,
                expected,
                actual,
            })
        }
    }
}
