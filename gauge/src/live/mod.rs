// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod live_gauge;

// Re-export.
pub use live_gauge::*;
