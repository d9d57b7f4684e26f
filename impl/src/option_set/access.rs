use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use syn::Visibility;

// Explicit visibility on the declaration is repeated on every generated
// member; inherited visibility adds nothing.
pub(super) fn mirror(vis: &Visibility) -> TokenStream2 {
  match vis {
    Visibility::Inherited => TokenStream2::new(),
    explicit => explicit.to_token_stream(),
  }
}
