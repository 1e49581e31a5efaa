// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end scenarios for the three allocators, each checked for its exact sizes and
//! for whether the sizes add up to the total (or deliberately don't).

use crate::{RatioError, assert_eq2, distribute, ok, reduce, resolve, slot};

fn sum(sizes: &[usize]) -> usize { sizes.iter().sum() }

#[test]
fn test_distribute_even_three_way_split() -> miette::Result<()> {
    // 110 / 3 = 36.67, so two of the three slots get the extra cell, lowest index first.
    let sizes = distribute(110, &[1, 1, 1], None)?;
    assert_eq2!(sizes, vec![37, 37, 36]);
    assert_eq2!(sum(&sizes), 110);
    ok!()
}

#[test]
fn test_distribute_with_minimum_pins_first_slot() -> miette::Result<()> {
    // [37, 37, 36] leaves slot 0 below 50. Pin it, and split the other 60 evenly.
    let sizes = distribute(110, &[1, 1, 1], Some(&[50, 1, 1]))?;
    assert_eq2!(sizes, vec![50, 30, 30]);
    assert_eq2!(sum(&sizes), 110);
    ok!()
}

#[test]
fn test_resolve_fixed_and_flexible() -> miette::Result<()> {
    let sizes = resolve(110, &[slot!(fixed: 20), slot!(ratio: 1), slot!(ratio: 1)])?;
    assert_eq2!(sizes, vec![20, 45, 45]);

    // 45 is below the minimum of 50, which leaves 40 for the last slot.
    let sizes = resolve(
        110,
        &[slot!(fixed: 20), slot!(ratio: 1, min: 50), slot!(ratio: 1)],
    )?;
    assert_eq2!(sizes, vec![20, 50, 40]);
    assert_eq2!(sum(&sizes), 110);

    // Three flexible slots share 90 cells, and the middle one needs 50 of them.
    let sizes = resolve(
        110,
        &[
            slot!(fixed: 20),
            slot!(ratio: 1, min: 1),
            slot!(ratio: 1, min: 50),
            slot!(ratio: 1, min: 1),
        ],
    )?;
    assert_eq2!(sizes, vec![20, 20, 50, 20]);
    assert_eq2!(sum(&sizes), 110);
    ok!()
}

#[test]
fn test_resolve_minimums_overflow_total() -> miette::Result<()> {
    let sizes = resolve(20, &[slot!(ratio: 1, min: 50), slot!(ratio: 1, min: 1)])?;
    assert_eq2!(sizes, vec![50, 1]);
    assert_eq2!(sum(&sizes), 51);
    ok!()
}

#[test]
fn test_reduce_capped_below_total() -> miette::Result<()> {
    let sizes = reduce(110, &[1, 1, 1], &[10, 10, 10], &[20, 20, 20])?;
    assert_eq2!(sizes, vec![10, 10, 10]);
    assert_eq2!(sum(&sizes), 30);
    ok!()
}

#[test]
fn test_distribute_all_zero_ratios_fails() {
    let result = distribute(90, &[0, 0, 0], None);
    assert_eq2!(result, Err(RatioError::ZeroRatioSum { slot_count: 3 }));
}
