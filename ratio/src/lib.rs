// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Proportional cell allocation
//!
//! A terminal layout has a fixed number of columns (or rows) to hand out, and a list of
//! slots (columns, rows, panels) that want some of them. This crate decides how many
//! cells each slot gets, as whole numbers that add up to the total.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [The three allocators](#the-three-allocators)
//! - [Rounding](#rounding)
//! - [Overflow and shortfall](#overflow-and-shortfall)
//! - [Layout helpers](#layout-helpers)
//! - [Logging](#logging)
//! <!-- /TOC -->
//!
//! # The three allocators
//!
//! | Function       | Use it when                                                          |
//! | :------------- | :------------------------------------------------------------------- |
//! | [`resolve`]    | You have a list of [`Slot`]s, some with fixed sizes, some flexible   |
//! | [`distribute`] | You have weights and (optionally) a minimum for each one             |
//! | [`reduce`]     | Sizes must shrink to fit, and each slot can give up a limited amount |
//!
//! ```
//! use r3bl_ratio::{resolve, slot};
//!
//! // 110 columns: a 20 column sidebar, then two flexible panes. The first pane needs
//! // at least 50 columns.
//! let sizes = resolve(110, &[
//!     slot!(fixed: 20),
//!     slot!(ratio: 1, min: 50),
//!     slot!(ratio: 1),
//! ])?;
//! assert_eq!(sizes, vec![20, 50, 40]);
//! # Ok::<(), r3bl_ratio::RatioError>(())
//! ```
//!
//! # Rounding
//!
//! Proportional shares are rarely whole numbers. [`apportion`] floors each exact share
//! and then hands the leftover cells, one each, to the slots with the largest fractional
//! remainder (lowest index first on a tie). The parts always add up to the budget.
//! There are no floats involved, so the output is the same on every platform.
//!
//! # Overflow and shortfall
//!
//! Neither is an error:
//! - [`distribute`] and [`resolve`] never give a slot less than its minimum, even if
//!   that means the sizes add up to more than the total. Clipping or scrolling is the
//!   renderer's call.
//! - [`reduce`] never gives a slot more than its maximum, even if that means the sizes
//!   add up to less than the total.
//!
//! The only errors are precondition violations, see [`RatioError`].
//!
//! # Layout helpers
//!
//! - [`split_region`] turns a [`Region`] into sub regions laid out along a
//!   [`LayoutDirection`], using [`resolve`] for the main axis.
//! - [`collapse_widths`] shrinks table column widths to fit a maximum width, using
//!   [`reduce`].
//!
//! # Logging
//!
//! The allocators emit [`tracing`] events when a fix-up pass pins slots. Nothing is
//! printed unless you install a subscriber, eg with [`TracingConfig::install_global`].

// Enable clippy::unwrap_in_result only for production code (not tests). Test code is
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it). The cfg_attr
// ensures strict error handling in library code while allowing tests to be ergonomic.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod allocator;
pub mod decl_macros;
pub mod layout;
pub mod log;
pub mod stack_alloc_types;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use allocator::*;
pub use layout::*;
pub use log::*;
pub use stack_alloc_types::*;
