// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod point_sample;
pub mod resolve_data;

// Re-export.
pub use point_sample::*;
pub use resolve_data::*;
