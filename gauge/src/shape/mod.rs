// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod gauge_shape;
pub mod unknown_variant;

// Re-export.
pub use gauge_shape::*;
pub use unknown_variant::*;
