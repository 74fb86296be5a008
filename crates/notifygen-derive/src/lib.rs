//! Host-side marker surface for notifygen.
//!
//! Rust has no free-standing inert field attributes, so the marker is made
//! legal in host compilations through a derive helper: `#[derive(Observable)]`
//! expands to nothing but declares `observable` and `observable_property` as
//! inert attributes on the fields of the deriving struct. The generator
//! itself never runs this macro; it matches the marker textually while
//! scanning.

use proc_macro::TokenStream;
use syn::{Data, DeriveInput, parse_macro_input};

/// No-op derive that legalizes the `#[observable]` field marker.
#[proc_macro_derive(Observable, attributes(observable, observable_property))]
pub fn derive_observable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match &input.data {
        Data::Struct(_) => TokenStream::new(),
        Data::Enum(_) | Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Observable can only be derived for structs")
                .to_compile_error()
                .into()
        }
    }
}
