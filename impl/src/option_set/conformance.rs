use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::option_set::validate::Decoded;

// The trait generated storage conforms to, by its user-visible name.
pub(super) const OPTION_SET_TRAIT: &str = "OptionSet";

// Whether the declaration's conformance clause already names the trait; the
// impl must not be declared twice under re-expansion.
fn already_conforms(decoded: &Decoded) -> bool {
  decoded.decl.conformances.iter().any(|path| path.is_ident(OPTION_SET_TRAIT))
}

// Zero or one trait impls. The impl hosts the raw-value alias as its
// associated type and wires the raw-value constructor and accessor to the
// stored field.
pub(super) fn conformance(decoded: &Decoded) -> TokenStream2 {
  if already_conforms(decoded) {
    return TokenStream2::new();
  }
  let name = &decoded.decl.ident;
  let raw_type = &decoded.raw_type;
  quote! {
    impl ::optionset::OptionSet for #name {
      type RawValue = #raw_type;

      fn from_raw_value(raw_value: #raw_type) -> Self {
        Self { raw_value }
      }

      fn raw_value(&self) -> #raw_type {
        self.raw_value
      }
    }
  }
}
