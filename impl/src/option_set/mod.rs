use proc_macro2::TokenStream as TokenStream2;

mod access;
mod args;
mod conformance;
mod diagnostics;
mod generator;
mod parse;
mod validate;

pub(crate) use parse::Declaration;

// ── driver ────────────────────────────────────────────────────────────────
fn compile_errors(errors: Vec<syn::Error>) -> TokenStream2 {
  errors.into_iter().map(|error| error.to_compile_error()).collect()
}

// Decode once, then hand the validated declaration to both synthesis roles.
// A malformed declaration reports its diagnostic and yields no declarations
// from either role; nothing is ever partially emitted.
pub(crate) fn expand(decl: Declaration) -> TokenStream2 {
  let mut errors = Vec::new();
  let Some(decoded) = validate::decode(&decl, &mut errors) else {
    return compile_errors(errors);
  };
  let mut output = generator::members(&decoded);
  output.extend(conformance::conformance(&decoded));
  output
}
