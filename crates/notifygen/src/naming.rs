//! Property name derivation.

use convert_case::{Case, Casing};

/// Derive a property name from a field identifier.
///
/// Strips at most one leading underscore, then uppercases the first
/// remaining character, leaving the rest untouched. An identifier that is
/// exactly the prefix character derives to the empty string; the pipeline
/// deliberately lets that flow through to emission, where the host compiler
/// rejects the generated unit.
#[must_use]
pub fn derive_property_name(field_ident: &str) -> String {
    let stripped = field_ident.strip_prefix('_').unwrap_or(field_ident);

    let mut chars = stripped.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut name = String::with_capacity(stripped.len());
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
            name
        }
    }
}

/// Property name for a field: the explicit override verbatim when present,
/// the derived name otherwise. The derivation is never invoked for an
/// overridden field.
#[must_use]
pub fn property_name(field_ident: &str, override_name: Option<&str>) -> String {
    match override_name {
        Some(name) => name.to_string(),
        None => derive_property_name(field_ident),
    }
}

/// Getter identifier for a property (`Name` -> `name`).
#[must_use]
pub fn getter_ident(property_name: &str) -> String {
    property_name.to_case(Case::Snake)
}

/// Setter identifier for a property (`Name` -> `set_name`).
#[must_use]
pub fn setter_ident(property_name: &str) -> String {
    format!("set_{}", property_name.to_case(Case::Snake))
}
