// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The process wide singleton describing how this gauge type renders itself: it
//! carries exactly one piece of information, the identity of the client side script
//! module responsible for drawing. See [`GaugeDescriptor::instance`].

use std::sync::LazyLock;

use crate::{InlineString, RenderModuleRef};

/// The ord of the script asset that draws this gauge type. Bit-exact contract: must
/// match the asset's deployed location.
pub const PROGRESS_BAR_GAUGE_RENDER_MODULE_ORD: &str =
    "module://bajauxProgressBar/rc/ProgressBarGauge.js";

static INSTANCE: LazyLock<GaugeDescriptor> = LazyLock::new(|| GaugeDescriptor {
    render_module_ref: RenderModuleRef::from_ord_str(PROGRESS_BAR_GAUGE_RENDER_MODULE_ORD),
});

/// Opaque rendering context handed to [`GaugeDescriptor::render_module_ref`].
///
/// Reserved for locale / environment specific resolution in richer hosts. The
/// descriptor in this crate ignores it, but the parameter is part of the call
/// contract so hosts can thread their context through without an API change.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// BCP 47 language tag of the viewing user, if the host knows it.
    pub locale: Option<InlineString>,
}

/// Singleton descriptor for the progress bar gauge widget type.
///
/// Exactly one instance exists per process, created on first access and immutable
/// thereafter. Any number of readers may use it concurrently without coordination.
#[derive(Debug)]
pub struct GaugeDescriptor {
    render_module_ref: RenderModuleRef,
}

impl GaugeDescriptor {
    /// The single shared descriptor instance.
    #[must_use]
    pub fn instance() -> &'static GaugeDescriptor { &INSTANCE }

    /// The fixed identity of the rendering module. The context is currently unused
    /// (see [`RenderContext`]). Always succeeds, never drifts across calls.
    #[must_use]
    pub fn render_module_ref(&self, _arg_context: &RenderContext) -> &RenderModuleRef {
        &self.render_module_ref
    }
}
