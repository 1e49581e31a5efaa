// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach source files.
pub mod collapse_widths;
pub mod region;
pub mod split_region;

// Re-export the public items.
pub use collapse_widths::*;
pub use region::*;
pub use split_region::*;
