// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Direction in which sub regions are laid out, one after another.
#[non_exhaustive]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Left to right. Sizes are widths (columns).
    #[default]
    Horizontal,
    /// Top to bottom. Sizes are heights (rows).
    Vertical,
}

/// A rectangle of cells, with its origin at `(col, row)`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub col: usize,
    pub row: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    #[must_use]
    pub fn new(col: usize, row: usize, width: usize, height: usize) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// The extent that gets split when laying out along `dir`.
    #[must_use]
    pub fn main_axis_extent(&self, dir: LayoutDirection) -> usize {
        match dir {
            LayoutDirection::Horizontal => self.width,
            LayoutDirection::Vertical => self.height,
        }
    }

    /// A region that starts `offset` cells along `dir` from this one's origin, spans
    /// `extent` cells along `dir`, and shares this one's cross axis.
    #[must_use]
    pub fn slice_main_axis(&self, dir: LayoutDirection, offset: usize, extent: usize) -> Self {
        match dir {
            LayoutDirection::Horizontal => Self {
                col: self.col.saturating_add(offset),
                width: extent,
                ..*self
            },
            LayoutDirection::Vertical => Self {
                row: self.row.saturating_add(offset),
                height: extent,
                ..*self
            },
        }
    }
}

impl Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Region[col: {}, row: {}, width: {}, height: {}]",
            self.col, self.row, self.width, self.height
        )
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}
