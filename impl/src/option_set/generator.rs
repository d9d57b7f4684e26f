use convert_case::{Case, Casing};
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{format_ident, quote};

use crate::option_set::access;
use crate::option_set::args::DIRECTIVE;
use crate::option_set::validate::Decoded;

// The fixed member set implementing the option-set abstraction: the storage
// struct with its raw-value field, the empty and raw-value constructors, and
// one bit constant per case in declaration order.
pub(super) fn members(decoded: &Decoded) -> TokenStream2 {
  let decl = decoded.decl;
  let name = &decl.ident;
  let raw_type = &decoded.raw_type;
  let vis = access::mirror(&decl.vis);
  // The declaration's own attributes carry over; the directive does not.
  let attrs = decl.attrs.iter().filter(|attr| !attr.path().is_ident(DIRECTIVE));

  let constants = decoded.cases.iter().map(|resolved| {
    let case = resolved.case;
    let case_attrs = &case.attrs;
    let const_name = format_ident!(
      "{}",
      case.ident.to_string().to_case(Case::ScreamingSnake),
      span = case.ident.span()
    );
    let shift = Literal::u32_unsuffixed(resolved.ordinal);
    quote! {
      #(#case_attrs)*
      #vis const #const_name: Self = Self::from_raw_value(1 << #shift);
    }
  });

  quote! {
    #(#attrs)*
    #vis struct #name {
      #vis raw_value: #raw_type,
    }

    impl #name {
      #vis const fn new() -> Self {
        Self { raw_value: 0 }
      }

      #vis const fn from_raw_value(raw_value: #raw_type) -> Self {
        Self { raw_value }
      }

      #(#constants)*
    }
  }
}
