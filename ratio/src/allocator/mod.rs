// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach source files.
pub mod apportion;
pub mod distribute;
pub mod ratio_error;
pub mod reduce;
pub mod resolve;
pub mod slot;

// Re-export the public items.
pub use apportion::*;
pub use distribute::*;
pub use ratio_error::*;
pub use reduce::*;
pub use resolve::*;
pub use slot::*;

// Tests.
#[cfg(test)]
mod test_ratio_scenarios;
