// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod gauge_descriptor;
pub mod render_module_ref;

// Re-export.
pub use gauge_descriptor::*;
pub use render_module_ref::*;
