use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericParam};

/// #[derive(Operand)] generates a call to the declarative macro bridge.
///
/// `impl_operand!` owns the operator list, so the derive only has to spell
/// the type and its generic parameters:
/// 1. #[derive(Operand)] (proc-macro) -> `impl_operand!([params] Name<args>)`
/// 2. impl_operand! (decl-macro) -> `Operand` impl + reversed operator impls
pub fn expand_derive_operand(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;

    // The bridge has no slot for a where clause.
    if let Some(where_clause) = &input.generics.where_clause {
        return syn::Error::new_spanned(
            where_clause,
            "#[derive(Operand)] does not support where clauses, move the bounds inline",
        )
        .to_compile_error();
    }

    if input.generics.params.is_empty() {
        return quote! {
            ::tola_props::impl_operand!(#ident);
        };
    }

    // Defaults are only legal on the type definition.
    let params = input.generics.params.iter().map(|param| match param {
        GenericParam::Type(ty) => {
            let mut ty = ty.clone();
            ty.eq_token = None;
            ty.default = None;
            quote!(#ty)
        }
        GenericParam::Const(c) => {
            let mut c = c.clone();
            c.eq_token = None;
            c.default = None;
            quote!(#c)
        }
        GenericParam::Lifetime(lt) => quote!(#lt),
    });
    let (_, ty_generics, _) = input.generics.split_for_impl();

    quote! {
        ::tola_props::impl_operand!([#(#params),*] #ident #ty_generics);
    }
}
