//! Deterministic text emission.
//!
//! Units are plain string templates rather than token streams: the emitted
//! bytes are part of the contract (hosts cache and diff them by hint key),
//! and a degenerate derived name must flow through as literal text for the
//! host compiler to reject, which a token-level builder cannot represent.

pub mod support;

use crate::{group::ContainerGroup, naming, semantic::ResolvedField};
use serde::Serialize;
use std::fmt::Write;

///
/// GeneratedUnit
///
/// One block of generated source plus its deterministic hint key.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GeneratedUnit {
    pub hint: String,
    pub text: String,
}

/// Emit the generated unit for one container group.
///
/// The unit is written to be `include!`d into the module that declares the
/// container, which is what gives it access to the private backing fields;
/// support items are referenced fully qualified so several units can share
/// one module without import collisions.
#[must_use]
pub fn container_unit(group: &ContainerGroup) -> GeneratedUnit {
    let name = &group.container.name;
    let qualified = group.container.qualified();

    let mut text = String::new();
    let out = &mut text;

    line(out, &format!(
        "// Code generated by notifygen for `{qualified}`. Do not edit by hand."
    ));
    line(out, &format!(
        "// Include this file from the module that declares `{name}`."
    ));
    line(out, "");

    // notification contract + event declaration
    line(out, &format!(
        "impl crate::observable::ObservableObject for {name} {{"
    ));
    line(out, "    fn property_changed(&mut self) -> &mut crate::observable::PropertyChangedEvent {");
    line(out, "        &mut self.property_changed");
    line(out, "    }");
    line(out, "}");
    line(out, "");

    // raise operation, then one property block per field in source order
    line(out, &format!("impl {name} {{"));
    line(out, "    /// Raise a change notification carrying `property_name`.");
    line(out, "    pub(crate) fn raise_property_changed(&mut self, property_name: &'static str) {");
    line(out, "        crate::observable::ObservableObject::property_changed(self).raise(property_name);");
    line(out, "    }");

    for field in &group.fields {
        property_block(out, field);
    }

    line(out, "}");

    GeneratedUnit {
        hint: group.container.hint(),
        text,
    }
}

fn property_block(out: &mut String, field: &ResolvedField) {
    let backing = &field.field_ident;
    let ty = &field.type_display;
    let property = &field.property_name;
    let getter = naming::getter_ident(property);
    let setter = naming::setter_ident(property);

    line(out, "");
    line(out, &format!("    pub fn {getter}(&self) -> &{ty} {{"));
    line(out, &format!("        &self.{backing}"));
    line(out, "    }");
    line(out, "");
    line(out, &format!("    pub fn {setter}(&mut self, value: {ty}) {{"));
    line(out, &format!("        if self.{backing} == value {{"));
    line(out, "            return;");
    line(out, "        }");
    line(out, &format!("        self.{backing} = value;"));
    line(out, &format!("        self.raise_property_changed(\"{property}\");"));
    line(out, "    }");
}

// writing into a String cannot fail
fn line(out: &mut String, text: &str) {
    let _ = writeln!(out, "{text}");
}
