// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A validated module-scheme ord string naming a client side rendering asset, eg:
//! `module://bajauxProgressBar/rc/ProgressBarGauge.js`. The host environment resolves
//! the asset and executes it to perform the actual drawing; this crate only carries
//! the identity.

use nom::{bytes::complete::{tag, take_while1},
          combinator::{map, rest, verify},
          IResult, Parser};

/// Failure to parse a module-scheme ord string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("invalid render module ord {input:?}")]
#[diagnostic(
    code(r3bl_gauge::descriptor::invalid_render_module_ref),
    help(
        "Expected the form `<scheme>://<module-name>/<resource-path>`, \
         eg: `module://bajauxProgressBar/rc/ProgressBarGauge.js`."
    )
)]
pub struct InvalidRenderModuleRef {
    /// The ord string that failed to parse.
    pub input: String,
}

/// A parsed `<scheme>://<module-name>/<resource-path>` reference.
///
/// The full ord string is the one bit-exact external contract of this crate: it must
/// match the deployed asset location byte for byte. Accessors slice the validated
/// string, so the round trip through [`Self::as_str`] is identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModuleRef {
    ord: String,
    scheme_end: usize,
    module_end: usize,
}

impl RenderModuleRef {
    /// Parse an ord string into its constituent parts.
    ///
    /// # Errors
    ///
    /// [`InvalidRenderModuleRef`] if the input does not have the
    /// `<scheme>://<module-name>/<resource-path>` form.
    pub fn try_from_ord_str(
        arg_ord: impl AsRef<str>,
    ) -> Result<RenderModuleRef, InvalidRenderModuleRef> {
        let ord = arg_ord.as_ref();
        match parse_module_ord(ord) {
            Ok((_, (scheme, module_name, _))) => Ok(RenderModuleRef {
                ord: ord.to_string(),
                scheme_end: scheme.len(),
                module_end: scheme.len() + SCHEME_SEPARATOR.len() + module_name.len(),
            }),
            Err(_) => Err(InvalidRenderModuleRef {
                input: ord.to_string(),
            }),
        }
    }

    /// Like [`Self::try_from_ord_str`] for ord strings known to be valid.
    ///
    /// # Panics
    ///
    /// This function will panic if the input is not a valid module-scheme ord string.
    #[must_use]
    pub fn from_ord_str(arg_ord: &str) -> RenderModuleRef {
        #[allow(clippy::match_wild_err_arm)]
        match Self::try_from_ord_str(arg_ord) {
            Ok(it) => it,
            Err(_) => panic!("Invalid render module ord: {arg_ord}"),
        }
    }

    /// The full ord string, byte for byte.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.ord }

    /// The scheme, eg: `module`.
    #[must_use]
    pub fn scheme(&self) -> &str { &self.ord[..self.scheme_end] }

    /// The module name, eg: `bajauxProgressBar`.
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.ord[self.scheme_end + SCHEME_SEPARATOR.len()..self.module_end]
    }

    /// The path under the module's resource directory, eg:
    /// `rc/ProgressBarGauge.js`.
    #[must_use]
    pub fn resource_path(&self) -> &str { &self.ord[self.module_end + 1..] }
}

impl std::fmt::Display for RenderModuleRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const SCHEME_SEPARATOR: &str = "://";

fn is_scheme_char(c: char) -> bool { c.is_ascii_alphanumeric() || c == '+' || c == '-' }

/// Parse `<scheme>://<module-name>/<resource-path>`, returning the three parts. The
/// resource path is the non-empty remainder, so this consumes all input.
pub fn parse_module_ord(input: &str) -> IResult<&str, (&str, &str, &str)> {
    map(
        (
            take_while1(is_scheme_char),
            tag(SCHEME_SEPARATOR),
            take_while1(|c: char| c != '/'),
            tag("/"),
            verify(rest, |path: &str| !path.is_empty()),
        ),
        |(scheme, _, module_name, _, path)| (scheme, module_name, path),
    )
    .parse(input)
}
