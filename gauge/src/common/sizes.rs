// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated storage types used throughout this crate. Small payloads (glyph
//! runs, display tags, value text) live on the stack and only spill to the heap when
//! they outgrow the inline storage.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Inline storage size for [`InlineString`] in bytes.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Inline storage size for [`InlineVec`] in items.
pub const INLINE_VEC_SIZE: usize = 8;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated vector storage. When this gets larger than [`INLINE_VEC_SIZE`], it
/// will be [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;

/// Formats the arguments into a new [`InlineString`] (no intermediate [String] is
/// allocated).
#[macro_export]
macro_rules! inline_string {
    ($($arg:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // We don't care about the result of this operation.
        write!(&mut acc, $($arg)*).ok();
        acc
    }};
}
