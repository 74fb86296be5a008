//! Per-tree semantic resolution of candidate fields.
//!
//! Resolution failures are recoverable per-field skips: a generator has to
//! tolerate partially invalid input while the host is mid-edit, so nothing
//! in this module returns an error. A candidate either becomes a
//! `ResolvedField` or quietly disappears (with a debug trace).

use crate::{
    naming,
    scan::{CandidateField, OwnerSite},
    tree::SourceTree,
};
use log::debug;
use quote::ToTokens;
use serde::Serialize;

///
/// ContainerKey
///
/// Fully-qualified identity of a destination type. Grouping keys on this,
/// not on syntax-node identity, so fields contributed by different trees
/// merge into one group while same-named types in different namespaces stay
/// apart.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct ContainerKey {
    pub namespace: Vec<String>,
    pub name: String,
}

impl ContainerKey {
    /// Display form, e.g. `demo::Person`.
    #[must_use]
    pub fn qualified(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace.join("::"), self.name)
        }
    }

    /// Deterministic hint key for the container's generated unit, a pure
    /// function of (namespace, name).
    #[must_use]
    pub fn hint(&self) -> String {
        let mut segments = self.namespace.clone();
        segments.push(self.name.clone());

        format!("{}.g.rs", segments.join("."))
    }
}

///
/// ResolvedField
///
/// A candidate plus everything emission needs. The declared-type display
/// string is always present; candidates that cannot produce one are dropped
/// during resolution, never represented with an empty type.
///

#[derive(Clone, Debug, Serialize)]
pub struct ResolvedField {
    pub field_ident: String,
    pub type_display: String,
    pub property_name: String,
    pub container: ContainerKey,
}

///
/// SemanticModel
///

pub struct SemanticModel<'a> {
    tree: &'a SourceTree,
}

impl<'a> SemanticModel<'a> {
    #[must_use]
    pub const fn new(tree: &'a SourceTree) -> Self {
        Self { tree }
    }

    /// Resolve a candidate scanned from this model's tree.
    ///
    /// Succeeds only for a named field owned by a non-generic struct; every
    /// other shape is skipped. The property name is computed here, once.
    #[must_use]
    pub fn resolve(&self, candidate: &CandidateField<'_>) -> Option<ResolvedField> {
        let (item, modules) = match &candidate.owner {
            OwnerSite::Struct { item, modules } => (*item, modules),
            OwnerSite::Enum { item, .. } => {
                debug!(
                    "skipping marked field in enum '{}': variants cannot host properties",
                    item.ident
                );
                return None;
            }
            OwnerSite::Union { item, .. } => {
                debug!(
                    "skipping marked field in union '{}': unions cannot host properties",
                    item.ident
                );
                return None;
            }
        };

        if !item.generics.params.is_empty() {
            debug!(
                "skipping marked field in generic struct '{}'",
                item.ident
            );
            return None;
        }

        let Some(ident) = &candidate.field.ident else {
            debug!(
                "skipping unnamed marked field in struct '{}'",
                item.ident
            );
            return None;
        };

        let field_ident = ident.to_string();
        let property_name =
            naming::property_name(&field_ident, candidate.override_name.as_deref());

        let mut namespace = self.tree.module_path().to_vec();
        namespace.extend(modules.iter().cloned());

        Some(ResolvedField {
            field_ident,
            type_display: type_display(&candidate.field.ty),
            property_name,
            container: ContainerKey {
                namespace,
                name: item.ident.to_string(),
            },
        })
    }
}

/// Render a declared type as display text.
///
/// Token streams print with spaces between every token; this collapses the
/// ones that make a type unreadable (`Vec < String >` -> `Vec<String>`).
#[must_use]
pub fn type_display(ty: &syn::Type) -> String {
    let raw = ty.to_token_stream().to_string();

    let mut display = raw;
    for (from, to) in [
        (" :: ", "::"),
        (":: ", "::"),
        (" ::", "::"),
        (" < ", "<"),
        ("< ", "<"),
        (" <", "<"),
        (" > ", "> "),
        (" >", ">"),
        (" ,", ","),
        ("& ", "&"),
        ("( ", "("),
        (" )", ")"),
        (" ;", ";"),
    ] {
        display = display.replace(from, to);
    }

    display
}
