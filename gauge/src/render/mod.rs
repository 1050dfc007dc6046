// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod gauge_render;
pub mod gauge_surface;
pub mod glyphs;

// Re-export.
pub use gauge_render::*;
pub use gauge_surface::*;
pub use glyphs::*;
