// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// One allocatable region (a column, a row, a panel) taking part in a call to
/// [`crate::resolve`]. A slot has no identity beyond its position: the size for the
/// `n`th slot is the `n`th entry of the output.
///
/// - `size`: when set, the slot gets exactly this many cells and never competes for
///   shared space.
/// - `ratio`: weight of the slot's share of whatever space is left after the fixed
///   slots are placed. `0` means the slot takes no part in the proportional split.
/// - `minimum_size`: the floor for a flexible slot. Ignored when `size` is set.
///
/// The [`Default`] is a flexible slot with a ratio of `1` that is at least `1` cell
/// wide. Use [`Slot::fixed`], [`Slot::flex`], or the [`crate::slot!`] macro to make one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub size: Option<usize>,
    pub ratio: usize,
    pub minimum_size: usize,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            size: None,
            ratio: 1,
            minimum_size: 1,
        }
    }
}

impl Slot {
    #[must_use]
    pub fn fixed(size: usize) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn flex(ratio: usize) -> Self {
        Self {
            ratio,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_minimum_size(self, minimum_size: usize) -> Self {
        Self {
            minimum_size,
            ..self
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool { self.size.is_some() }
}

/// Shorthand to create a [`Slot`].
///
/// ```
/// use r3bl_ratio::{Slot, slot};
///
/// assert_eq!(slot!(fixed: 20), Slot::fixed(20));
/// assert_eq!(slot!(ratio: 2), Slot::flex(2));
/// assert_eq!(slot!(ratio: 1, min: 50), Slot::flex(1).with_minimum_size(50));
/// ```
#[macro_export]
macro_rules! slot {
    (fixed: $arg_size: expr) => {
        $crate::Slot::fixed($arg_size)
    };
    (ratio: $arg_ratio: expr) => {
        $crate::Slot::flex($arg_ratio)
    };
    (ratio: $arg_ratio: expr, min: $arg_min: expr) => {
        $crate::Slot::flex($arg_ratio).with_minimum_size($arg_min)
    };
}
