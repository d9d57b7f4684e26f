use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, Ident, Lit, Meta, Result as SynResult, Token, Type};

use crate::option_set::diagnostics::Diagnostic;

// Attribute name of the directive on the quoted declaration.
pub(super) const DIRECTIVE: &str = "option_set";
// The only recognized argument label.
pub(super) const OPTIONS_NAME_LABEL: &str = "options_name";
// Flag-enumeration name used when the label is absent.
pub(super) const DEFAULT_OPTIONS_NAME: &str = "Options";

// Decoded `#[option_set(...)]` arguments: positional type arguments plus
// labeled expressions, order-independent.
pub(super) struct DirectiveArgs {
  raw_type: Option<Type>,
  named: Vec<(Ident, Expr)>,
  span: Span,
}

struct RawArgs {
  raw_type: Option<Type>,
  named: Vec<(Ident, Expr)>,
}

impl Parse for RawArgs {
  fn parse(input: ParseStream) -> SynResult<Self> {
    let mut raw_type = None;
    let mut named = Vec::new();
    while !input.is_empty() {
      if input.peek(Ident) && input.peek2(Token![=]) {
        let label: Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        let value: Expr = input.parse()?;
        named.push((label, value));
      } else {
        // The first type argument is the raw type; extras are tolerated.
        let ty: Type = input.parse()?;
        if raw_type.is_none() {
          raw_type = Some(ty);
        }
      }
      // Optional trailing comma
      let _ = input.parse::<Token![,]>().ok();
    }
    Ok(Self { raw_type, named })
  }
}

impl DirectiveArgs {
  // Locate the directive attribute on the declaration. An absent or bare
  // directive decodes to empty arguments; whether a raw type is required is
  // decided at resolution time.
  pub(super) fn decode(attrs: &[Attribute], errors: &mut Vec<syn::Error>) -> Option<Self> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident(DIRECTIVE)) else {
      return Some(Self { raw_type: None, named: Vec::new(), span: Span::call_site() });
    };
    let span = attr.span();
    match &attr.meta {
      Meta::Path(_) => Some(Self { raw_type: None, named: Vec::new(), span }),
      Meta::List(list) => match syn::parse2::<RawArgs>(list.tokens.clone()) {
        Ok(RawArgs { raw_type, named }) => Some(Self { raw_type, named, span }),
        Err(err) => {
          errors.push(err);
          None
        }
      },
      Meta::NameValue(nv) => {
        errors.push(syn::Error::new(nv.span(), "expected `#[option_set(<raw type>, ...)]`"));
        None
      }
    }
  }

  // The resolved flag-enumeration name: the default unless overridden by a
  // string literal under the recognized label.
  pub(super) fn options_name(&self, errors: &mut Vec<syn::Error>) -> Option<String> {
    match self.named.iter().find(|(label, _)| *label == OPTIONS_NAME_LABEL) {
      None => Some(DEFAULT_OPTIONS_NAME.to_owned()),
      Some((_, Expr::Lit(ExprLit { lit: Lit::Str(name), .. }))) => Some(name.value()),
      Some((label, other)) => {
        errors.push(Diagnostic::RequiresStringLiteral(label.to_string()).into_error(other.span()));
        None
      }
    }
  }

  // The raw integer type backing the bitmask.
  pub(super) fn raw_type(&self, errors: &mut Vec<syn::Error>) -> Option<Type> {
    match &self.raw_type {
      Some(ty) => Some(ty.clone()),
      None => {
        errors.push(Diagnostic::RequiresOptionsEnumRawType.into_error(self.span));
        None
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use syn::parse_quote;

  use super::*;

  fn decode(attr: Attribute) -> DirectiveArgs {
    let mut errors = Vec::new();
    let args = DirectiveArgs::decode(&[attr], &mut errors).expect("decode");
    assert!(errors.is_empty());
    args
  }

  #[test]
  fn default_name_when_label_absent() {
    let args = decode(parse_quote!(#[option_set(u8)]));
    let mut errors = Vec::new();
    assert_eq!(args.options_name(&mut errors).as_deref(), Some("Options"));
    assert!(errors.is_empty());
  }

  #[test]
  fn label_overrides_the_name() {
    let args = decode(parse_quote!(#[option_set(u8, options_name = "Permissions")]));
    let mut errors = Vec::new();
    assert_eq!(args.options_name(&mut errors).as_deref(), Some("Permissions"));
    assert!(errors.is_empty());
  }

  #[test]
  fn unknown_labels_are_ignored() {
    let args = decode(parse_quote!(#[option_set(u16, retention = 3)]));
    let mut errors = Vec::new();
    assert_eq!(args.options_name(&mut errors).as_deref(), Some("Options"));
    assert!(args.raw_type(&mut errors).is_some());
    assert!(errors.is_empty());
  }

  #[test]
  fn non_string_name_is_reported() {
    let args = decode(parse_quote!(#[option_set(u8, options_name = 42)]));
    let mut errors = Vec::new();
    assert!(args.options_name(&mut errors).is_none());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("macro argument options_name must be a string literal"));
  }

  #[test]
  fn missing_type_argument_is_reported() {
    let args = decode(parse_quote!(#[option_set]));
    let mut errors = Vec::new();
    assert!(args.raw_type(&mut errors).is_none());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("macro requires a raw type"));
  }
}
