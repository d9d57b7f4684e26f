use proc_macro2::{Span, TokenStream as TokenStream2};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, LitInt, Path, Result as SynResult, Token, Visibility, braced};

// Input grammar for `option_set!`: a struct declaration carrying the
// directive attribute, with flag enumerations nested in its body. The nested
// enums are why this is a custom grammar rather than `syn::ItemStruct`.
pub(crate) enum Declaration {
  Struct(StructDecl),
  // Any other declaration kind; kept around so the validator can reject it
  // with a proper diagnostic instead of a parse error.
  Other { attrs: Vec<Attribute>, span: Span },
}

pub(crate) struct StructDecl {
  pub attrs: Vec<Attribute>,
  pub vis: Visibility,
  pub ident: Ident,
  // `: A + B` clause naming conformances the declaration already has.
  pub conformances: Vec<Path>,
  pub members: Vec<FlagEnum>,
}

pub(crate) struct FlagEnum {
  pub ident: Ident,
  pub cases: Vec<FlagCase>,
}

pub(crate) struct FlagCase {
  pub attrs: Vec<Attribute>,
  pub ident: Ident,
  pub value: Option<LitInt>,
}

impl Declaration {
  pub(crate) fn attrs(&self) -> &[Attribute] {
    match self {
      Declaration::Struct(decl) => &decl.attrs,
      Declaration::Other { attrs, .. } => attrs,
    }
  }
}

impl Parse for Declaration {
  fn parse(input: ParseStream) -> SynResult<Self> {
    let attrs = input.call(Attribute::parse_outer)?;
    let vis: Visibility = input.parse()?;
    if !input.peek(Token![struct]) {
      let span = input.span();
      let _rest: TokenStream2 = input.parse()?;
      return Ok(Declaration::Other { attrs, span });
    }

    let _struct: Token![struct] = input.parse()?;
    let ident: Ident = input.parse()?;
    let conformances = if input.peek(Token![:]) {
      let _colon: Token![:] = input.parse()?;
      Punctuated::<Path, Token![+]>::parse_separated_nonempty(input)?.into_iter().collect()
    } else {
      Vec::new()
    };

    let body;
    braced!(body in input);
    let mut members = Vec::new();
    while !body.is_empty() {
      members.push(body.parse()?);
    }

    Ok(Declaration::Struct(StructDecl { attrs, vis, ident, conformances, members }))
  }
}

impl Parse for FlagEnum {
  fn parse(input: ParseStream) -> SynResult<Self> {
    // Enum-level attributes and visibility are accepted and consumed; the
    // enumeration is flag declaration syntax, not an emitted item.
    let _attrs = input.call(Attribute::parse_outer)?;
    let _vis: Visibility = input.parse()?;
    let _enum: Token![enum] = input.parse()?;
    let ident: Ident = input.parse()?;
    let body;
    braced!(body in input);
    let cases = Punctuated::<FlagCase, Token![,]>::parse_terminated(&body)?.into_iter().collect();
    Ok(FlagEnum { ident, cases })
  }
}

impl Parse for FlagCase {
  fn parse(input: ParseStream) -> SynResult<Self> {
    let attrs = input.call(Attribute::parse_outer)?;
    let ident: Ident = input.parse()?;
    let value = if input.peek(Token![=]) {
      let _eq: Token![=] = input.parse()?;
      Some(input.parse()?)
    } else {
      None
    };
    Ok(FlagCase { attrs, ident, value })
  }
}
