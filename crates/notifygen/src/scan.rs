//! Candidate scanning: find marked fields in one syntax tree.
//!
//! Scanning is purely syntactic. A field is a candidate iff it carries an
//! attribute matching the marker (`marker::is_marker`); no judgement is made
//! here about whether the owning declaration can actually host a generated
//! property. That is the resolver's job.

use crate::{
    marker::{MarkerArgs, is_marker},
    tree::SourceTree,
};
use log::debug;
use syn::{Field, Item, ItemEnum, ItemStruct, ItemUnion};

///
/// OwnerSite
///
/// The declaration that lexically owns a candidate field, together with the
/// inline module path leading to it inside its tree.
///

#[derive(Debug)]
pub enum OwnerSite<'a> {
    Struct {
        item: &'a ItemStruct,
        modules: Vec<String>,
    },
    Enum {
        item: &'a ItemEnum,
        modules: Vec<String>,
    },
    Union {
        item: &'a ItemUnion,
        modules: Vec<String>,
    },
}

///
/// CandidateField
///
/// One marked field, prior to semantic resolution.
///

#[derive(Debug)]
pub struct CandidateField<'a> {
    pub field: &'a Field,
    pub owner: OwnerSite<'a>,
    pub override_name: Option<String>,
}

impl CandidateField<'_> {
    /// Identifier text of the field, if it has one.
    #[must_use]
    pub fn ident_text(&self) -> Option<String> {
        self.field.ident.as_ref().map(ToString::to_string)
    }
}

/// Collect every candidate field in the tree, in source order.
///
/// Absence of matches is not an error; the result is simply empty.
#[must_use]
pub fn scan_tree(tree: &SourceTree) -> Vec<CandidateField<'_>> {
    let mut candidates = Vec::new();
    let mut modules = Vec::new();
    walk_items(&tree.file().items, &mut modules, &mut candidates);

    debug!(
        "scanned tree '{}': {} candidate(s)",
        tree.name(),
        candidates.len()
    );

    candidates
}

fn walk_items<'a>(
    items: &'a [Item],
    modules: &mut Vec<String>,
    candidates: &mut Vec<CandidateField<'a>>,
) {
    for item in items {
        match item {
            Item::Struct(item) => {
                for field in &item.fields {
                    collect(field, candidates, || OwnerSite::Struct {
                        item,
                        modules: modules.clone(),
                    });
                }
            }
            Item::Enum(item) => {
                for variant in &item.variants {
                    for field in &variant.fields {
                        collect(field, candidates, || OwnerSite::Enum {
                            item,
                            modules: modules.clone(),
                        });
                    }
                }
            }
            Item::Union(item) => {
                for field in &item.fields.named {
                    collect(field, candidates, || OwnerSite::Union {
                        item,
                        modules: modules.clone(),
                    });
                }
            }
            Item::Mod(item) => {
                if let Some((_, items)) = &item.content {
                    modules.push(item.ident.to_string());
                    walk_items(items, modules, candidates);
                    modules.pop();
                }
            }
            _ => {}
        }
    }
}

fn collect<'a>(
    field: &'a Field,
    candidates: &mut Vec<CandidateField<'a>>,
    owner: impl FnOnce() -> OwnerSite<'a>,
) {
    let mut markers = field.attrs.iter().filter(|attr| is_marker(attr));

    let Some(attr) = markers.next() else {
        return;
    };

    // the marker is single-use; extra occurrences are inert
    if markers.next().is_some() {
        debug!("field carries more than one marker; using the first");
    }

    let args = MarkerArgs::parse(attr);

    candidates.push(CandidateField {
        field,
        owner: owner(),
        override_name: args.property_name,
    });
}
