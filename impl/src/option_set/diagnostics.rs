use proc_macro2::Span;

// Error catalog for option-set synthesis. Every kind is an error, fatal to
// the current expansion and never to the compiler. A rendered record is the
// human-readable message followed by a stable bracketed identifier,
// `optionset.OptionSet.<Kind>`, so tooling can match records without
// scraping message text.
pub(super) enum Diagnostic {
  // The directive is attached to something other than a struct declaration.
  RequiresStruct,
  // A directive argument that must be a plain string literal is not one.
  RequiresStringLiteral(String),
  // No nested enumeration matches the resolved options-enum name.
  RequiresOptionsEnum(String),
  // The directive carries no raw-type argument.
  RequiresOptionsEnumRawType,
}

const DOMAIN: &str = "optionset";

impl Diagnostic {
  pub(super) fn identifier(&self) -> String {
    let kind = match self {
      Diagnostic::RequiresStruct => "RequiresStruct",
      Diagnostic::RequiresStringLiteral(_) => "RequiresStringLiteral",
      Diagnostic::RequiresOptionsEnum(_) => "RequiresOptionsEnum",
      Diagnostic::RequiresOptionsEnumRawType => "RequiresOptionsEnumRawType",
    };
    format!("{DOMAIN}.OptionSet.{kind}")
  }

  pub(super) fn message(&self) -> String {
    match self {
      Diagnostic::RequiresStruct => "macro can only be applied to a struct".to_owned(),
      Diagnostic::RequiresStringLiteral(label) => format!("macro argument {label} must be a string literal"),
      Diagnostic::RequiresOptionsEnum(name) => format!("macro requires nested options enum '{name}'"),
      Diagnostic::RequiresOptionsEnumRawType => "macro requires a raw type".to_owned(),
    }
  }

  pub(super) fn into_error(self, span: Span) -> syn::Error {
    syn::Error::new(span, format!("{} [{}]", self.message(), self.identifier()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identifiers_are_stable() {
    assert_eq!(Diagnostic::RequiresStruct.identifier(), "optionset.OptionSet.RequiresStruct");
    assert_eq!(
      Diagnostic::RequiresStringLiteral("options_name".to_owned()).identifier(),
      "optionset.OptionSet.RequiresStringLiteral"
    );
    assert_eq!(
      Diagnostic::RequiresOptionsEnum("Options".to_owned()).identifier(),
      "optionset.OptionSet.RequiresOptionsEnum"
    );
    assert_eq!(
      Diagnostic::RequiresOptionsEnumRawType.identifier(),
      "optionset.OptionSet.RequiresOptionsEnumRawType"
    );
  }

  #[test]
  fn messages_name_their_subject() {
    assert_eq!(Diagnostic::RequiresStruct.message(), "macro can only be applied to a struct");
    assert_eq!(
      Diagnostic::RequiresStringLiteral("options_name".to_owned()).message(),
      "macro argument options_name must be a string literal"
    );
    assert_eq!(
      Diagnostic::RequiresOptionsEnum("Permissions".to_owned()).message(),
      "macro requires nested options enum 'Permissions'"
    );
    assert_eq!(Diagnostic::RequiresOptionsEnumRawType.message(), "macro requires a raw type");
  }

  #[test]
  fn rendered_errors_carry_message_and_identifier() {
    let error = Diagnostic::RequiresOptionsEnumRawType.into_error(Span::call_site());
    let text = error.to_string();
    assert!(text.starts_with("macro requires a raw type"));
    assert!(text.ends_with("[optionset.OptionSet.RequiresOptionsEnumRawType]"));
  }
}
