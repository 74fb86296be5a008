//! The marker annotation and its argument surface.

use darling::FromMeta;
use log::warn;
use syn::{Attribute, Meta};

/// Accepted textual forms of the marker, compared against the last path
/// segment of an attribute. Qualification is deliberately ignored: an
/// unrelated attribute sharing the bare name is still collected, matching
/// the purely textual contract of the scanner.
pub const MARKER_FORMS: [&str; 2] = ["observable", "observable_property"];

/// Does this attribute carry the marker?
#[must_use]
pub fn is_marker(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| MARKER_FORMS.iter().any(|form| segment.ident == form))
}

///
/// MarkerArgs
///

#[derive(Clone, Debug, Default, FromMeta)]
#[darling(default)]
pub struct MarkerArgs {
    /// Explicit property name, used verbatim instead of the derived one.
    pub property_name: Option<String>,
}

impl MarkerArgs {
    /// Parse the marker's argument list.
    ///
    /// A bare `#[observable]` carries no arguments. A malformed argument
    /// list degrades to the default (no override) with a warning; the host
    /// compiler is the one that reports the malformed attribute itself.
    #[must_use]
    pub fn parse(attr: &Attribute) -> Self {
        match &attr.meta {
            Meta::Path(_) => Self::default(),
            meta => Self::from_meta(meta).unwrap_or_else(|err| {
                warn!("ignoring malformed marker arguments: {err}");
                Self::default()
            }),
        }
    }
}
