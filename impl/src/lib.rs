//! Procedural macro implementation behind the `optionset` crate.
//!
//! Everything here runs at expansion time: parsing the quoted declaration,
//! validating its shape, and synthesizing the option-set members and
//! conformance. The user-facing documentation lives on the `optionset`
//! crate, which re-exports [`option_set!`].

extern crate proc_macro;
use proc_macro::TokenStream;

mod option_set;

/// Synthesizes a bitmask-backed option set from a struct declaration with a
/// nested flag enumeration. See the `optionset` crate documentation for the
/// full surface and examples.
#[proc_macro]
pub fn option_set(input: TokenStream) -> TokenStream {
  let decl = syn::parse_macro_input!(input as option_set::Declaration);
  option_set::expand(decl).into()
}
