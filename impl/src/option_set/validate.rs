use syn::Type;

use crate::option_set::args::DirectiveArgs;
use crate::option_set::diagnostics::Diagnostic;
use crate::option_set::parse::{Declaration, FlagCase, FlagEnum, StructDecl};

// The validated triple behind synthesis: the struct declaration, its flag
// enumeration's case sequence with resolved raw values, and the raw type.
// `None` always follows exactly one reported diagnostic.
pub(super) struct Decoded<'a> {
  pub decl: &'a StructDecl,
  pub cases: Vec<ResolvedCase<'a>>,
  pub raw_type: Type,
}

pub(super) struct ResolvedCase<'a> {
  pub case: &'a FlagCase,
  // Bit position: the declared raw value, or ordinal position otherwise.
  pub ordinal: u32,
}

// Decode order: options-name resolution, struct check, enumeration lookup,
// raw-type resolution. The first failure reports and stops.
pub(super) fn decode<'a>(decl: &'a Declaration, errors: &mut Vec<syn::Error>) -> Option<Decoded<'a>> {
  let args = DirectiveArgs::decode(decl.attrs(), errors)?;
  let name = args.options_name(errors)?;

  let decl = match decl {
    Declaration::Struct(decl) => decl,
    Declaration::Other { span, .. } => {
      errors.push(Diagnostic::RequiresStruct.into_error(*span));
      return None;
    }
  };

  // First member with a matching name wins when names repeat.
  let Some(flag_enum) = decl.members.iter().find(|member| member.ident == name) else {
    errors.push(Diagnostic::RequiresOptionsEnum(name).into_error(decl.ident.span()));
    return None;
  };

  let raw_type = args.raw_type(errors)?;
  let cases = resolve_cases(flag_enum, errors)?;
  Some(Decoded { decl, cases, raw_type })
}

// Host-language case numbering: an explicit raw value positions its case,
// and implicit cases continue counting from the previous value.
fn resolve_cases<'a>(flag_enum: &'a FlagEnum, errors: &mut Vec<syn::Error>) -> Option<Vec<ResolvedCase<'a>>> {
  let mut cases = Vec::with_capacity(flag_enum.cases.len());
  let mut next: u32 = 0;
  for case in &flag_enum.cases {
    let ordinal = match &case.value {
      Some(lit) => match lit.base10_parse::<u32>() {
        Ok(value) => value,
        Err(err) => {
          errors.push(err);
          return None;
        }
      },
      None => next,
    };
    next = ordinal.saturating_add(1);
    cases.push(ResolvedCase { case, ordinal });
  }
  Some(cases)
}
