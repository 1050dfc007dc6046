// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single error kind produced when decoding a [`GaugeShape`] from a persisted
//! ordinal or tag that is not in the closed variant set.
//!
//! There is no local recovery path. An unmapped variant means the persisted
//! configuration comes from a different (newer or older) variant set, so the error
//! surfaces immediately to the caller.
//!
//! [`GaugeShape`]: crate::GaugeShape

/// Decoding failure for the closed [`GaugeShape`] variant set.
///
/// [`GaugeShape`]: crate::GaugeShape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum UnknownVariant {
    /// The ordinal is outside the closed range `0..=2`.
    #[error("no gauge shape has ordinal {ordinal} (closed range 0..=2)")]
    #[diagnostic(
        code(r3bl_gauge::shape::unknown_ordinal),
        help(
            "Valid ordinals are 0 (Line), 1 (Circle) and 2 (SemiCircle). \
             An out of range ordinal usually means the persisted configuration \
             was written by a different variant set."
        )
    )]
    Ordinal {
        /// The ordinal that failed to decode.
        ordinal: i64,
    },

    /// The tag does not name any variant. Tags are case sensitive.
    #[error("no gauge shape has tag {tag:?}")]
    #[diagnostic(
        code(r3bl_gauge::shape::unknown_tag),
        help(
            "Valid tags are \"Line\", \"Circle\" and \"SemiCircle\". \
             Tags are matched exactly (case sensitive)."
        )
    )]
    Tag {
        /// The tag that failed to decode.
        tag: String,
    },
}
