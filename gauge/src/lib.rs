// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words bajaux gauge's conflated

//! # r3bl_gauge
//!
//! Progress-bar gauge widget for terminal dashboards: a single subscribed point value
//! rendered as a horizontal bar, a circular ring, or a semicircular arc, with live
//! auto-ranging and status-aware coloring.
//!
//! ## Overview
//!
//! The crate is organized around a small pipeline:
//!
//! 1. [`GaugeDescriptor`] - the singleton widget descriptor. It exposes the render
//!    module reference (`module://bajauxProgressBar/rc/ProgressBarGauge.js`) that host
//!    dashboards use to locate the gauge renderer. See [`GaugeDescriptor::instance`].
//! 2. [`GaugeShape`] - the frozen shape enumeration ([`GaugeShape::Line`],
//!    [`GaugeShape::Circle`], [`GaugeShape::SemiCircle`]) with ordinal and tag lookup
//!    that fails with [`UnknownVariant`] for anything outside the range.
//! 3. [`GaugeProps`] - the configurable surface of the widget (bounds, colors, value
//!    text pattern, shape). All fields have defaults so an empty config is valid.
//! 4. [`resolve_data`] - turns an incoming [`PointSample`] (numeric, boolean, enum, or
//!    null, with optional facets and status flags) plus the props into renderable
//!    [`GaugeData`], growing the remembered [`AutoRange`] when bounds are automatic.
//! 5. [`render_gauge`] - rasterizes [`GaugeData`] into a [`GaugeSurface`] of colored
//!    cells, ready to [`paint`](GaugeSurface::paint) with [`crossterm`] styling.
//! 6. [`LiveGauge`] - an async task that subscribes to a
//!    [`watch`](tokio::sync::watch) channel of samples and emits one rendered frame
//!    per observed change, conflating bursts so only the latest sample is drawn.
//!
//! ## Example
//!
//! ```
//! use r3bl_gauge::{render_gauge, resolve_data, AutoRange, GaugeProps, PointSample};
//!
//! let props = GaugeProps::default();
//! let mut range = AutoRange::default();
//! let sample = PointSample::numeric(65.0);
//!
//! let data = resolve_data(&props, &sample, &mut range);
//! let surface = render_gauge(&props, &data, 40);
//! println!("{}", surface.paint());
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it). The cfg_attr ensures test
// code within the library can also use .unwrap() freely.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod common;
pub mod descriptor;
pub mod live;
pub mod model;
pub mod props;
pub mod render;
pub mod shape;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use common::*;
pub use descriptor::*;
pub use live::*;
pub use model::*;
pub use props::*;
pub use render::*;
pub use shape::*;
