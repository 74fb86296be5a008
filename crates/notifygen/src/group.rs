//! Grouping resolved fields by container identity.

use crate::semantic::{ContainerKey, ResolvedField};
use serde::Serialize;
use std::fmt;

///
/// Diagnostic
///
/// Non-fatal findings surfaced alongside the generated units. The pipeline
/// never resolves these on its own; emission proceeds and the host compiler
/// stays the final arbiter.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Diagnostic {
    /// Two fields of one container derived (or overrode to) the same
    /// property name; the emitted unit will not compile in the host.
    DuplicatePropertyName { container: String, property: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePropertyName {
                container,
                property,
            } => write!(
                f,
                "duplicate property name '{property}' in container '{container}'"
            ),
        }
    }
}

///
/// ContainerGroup
///
/// One destination type and its marked fields, in first-seen source order.
///

#[derive(Clone, Debug, Serialize)]
pub struct ContainerGroup {
    pub container: ContainerKey,
    pub fields: Vec<ResolvedField>,
}

/// Partition resolved fields into container groups.
///
/// Keys on fully-qualified container identity, so a type whose marked
/// fields arrive from several trees folds into a single group, while two
/// same-named types in different namespaces stay separate. Groups come out
/// in first-container-seen order; fields keep their arrival order.
#[must_use]
pub fn group_fields(
    resolved: Vec<ResolvedField>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<ContainerGroup> {
    let mut groups: Vec<ContainerGroup> = Vec::new();

    for field in resolved {
        let existing = groups
            .iter()
            .position(|group| group.container == field.container);

        match existing {
            Some(index) => groups[index].fields.push(field),
            None => groups.push(ContainerGroup {
                container: field.container.clone(),
                fields: vec![field],
            }),
        }
    }

    for group in &groups {
        for (index, field) in group.fields.iter().enumerate() {
            let duplicate = group.fields[..index]
                .iter()
                .any(|earlier| earlier.property_name == field.property_name);

            if duplicate {
                diagnostics.push(Diagnostic::DuplicatePropertyName {
                    container: group.container.qualified(),
                    property: field.property_name.clone(),
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(namespace: &[&str], container: &str, ident: &str, property: &str) -> ResolvedField {
        ResolvedField {
            field_ident: ident.to_string(),
            type_display: "u32".to_string(),
            property_name: property.to_string(),
            container: ContainerKey {
                namespace: namespace.iter().map(ToString::to_string).collect(),
                name: container.to_string(),
            },
        }
    }

    #[test]
    fn fields_from_different_trees_merge_by_qualified_identity() {
        let mut diagnostics = Vec::new();
        let groups = group_fields(
            vec![
                resolved(&["demo"], "Person", "_a", "A"),
                resolved(&["demo"], "Other", "_b", "B"),
                resolved(&["demo"], "Person", "_c", "C"),
            ],
            &mut diagnostics,
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].container.name, "Person");
        assert_eq!(groups[0].fields.len(), 2);
        assert_eq!(groups[1].container.name, "Other");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn same_simple_name_in_different_namespaces_stays_separate() {
        let mut diagnostics = Vec::new();
        let groups = group_fields(
            vec![
                resolved(&["a"], "Config", "_x", "X"),
                resolved(&["b"], "Config", "_y", "Y"),
            ],
            &mut diagnostics,
        );

        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn group_order_is_first_seen() {
        let mut diagnostics = Vec::new();
        let groups = group_fields(
            vec![
                resolved(&[], "B", "_x", "X"),
                resolved(&[], "A", "_y", "Y"),
                resolved(&[], "B", "_z", "Z"),
            ],
            &mut diagnostics,
        );

        let names: Vec<_> = groups.iter().map(|g| g.container.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn duplicate_property_names_are_diagnosed_but_kept() {
        let mut diagnostics = Vec::new();
        let groups = group_fields(
            vec![
                resolved(&["demo"], "S", "_value", "Value"),
                resolved(&["demo"], "S", "value", "Value"),
            ],
            &mut diagnostics,
        );

        // both fields survive for emission
        assert_eq!(groups[0].fields.len(), 2);
        assert_eq!(
            diagnostics,
            [Diagnostic::DuplicatePropertyName {
                container: "demo::S".to_string(),
                property: "Value".to_string(),
            }]
        );
    }
}
