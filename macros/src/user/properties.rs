//! #[derive(Properties)]
//!
//! Each `#[property(..)]` container attribute becomes one method on the type
//! returning a property view bound to `self`:
//!
//! ```ignore
//! #[property(pub count: i32, get = Counter::read, set = Counter::write)]
//! // =>
//! pub fn count(&self) -> ::tola_props::ReadWrite<::tola_props::Bound<'_, Self>, i32> {
//!     ::tola_props::Bound::new(self).read_write(Counter::read, Counter::write)
//! }
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    DeriveInput, Expr, Ident, Token, Type, Visibility,
    parse::{Parse, ParseStream},
};

use crate::common::{next_option, parse_unique_value, try_parse_keyword};

/// One parsed `#[property(..)]` attribute.
struct PropertyDecl {
    vis: Visibility,
    name: Ident,
    ty: Type,
    getter: Option<Expr>,
    setter: Option<Expr>,
    mutable: bool,
}

impl Parse for PropertyDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let vis: Visibility = input.parse()?;
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;

        let mut getter = None;
        let mut setter = None;
        let mut mutable = false;

        while next_option(input)? {
            if try_parse_keyword(input, "mutable")? {
                mutable = true;
                continue;
            }

            let key: Ident = input.parse()?;
            match key.to_string().as_str() {
                "get" => parse_unique_value(input, &key, &mut getter)?,
                "set" => parse_unique_value(input, &key, &mut setter)?,
                _ => {
                    return Err(syn::Error::new(
                        key.span(),
                        "unknown property option, expected `get`, `set` or `mutable`",
                    ));
                }
            }
        }

        Ok(PropertyDecl {
            vis,
            name,
            ty,
            getter,
            setter,
            mutable,
        })
    }
}

impl PropertyDecl {
    fn expand(&self) -> syn::Result<TokenStream2> {
        let PropertyDecl {
            vis, name, ty, mutable, ..
        } = self;

        let (receiver, binding_ty, binding) = if *mutable {
            (
                quote!(&mut self),
                quote!(::tola_props::BoundMut<'_, Self>),
                quote!(::tola_props::BoundMut::new(self)),
            )
        } else {
            (
                quote!(&self),
                quote!(::tola_props::Bound<'_, Self>),
                quote!(::tola_props::Bound::new(self)),
            )
        };

        let (variant, body) = match (&self.getter, &self.setter) {
            (Some(get), Some(set)) => (quote!(ReadWrite), quote!(read_write(#get, #set))),
            (Some(get), None) => (quote!(ReadOnly), quote!(read_only(#get))),
            (None, Some(set)) => (quote!(WriteOnly), quote!(write_only(#set))),
            (None, None) => {
                return Err(syn::Error::new(
                    name.span(),
                    format!("property `{name}` needs a `get` accessor, a `set` accessor, or both"),
                ));
            }
        };

        Ok(quote! {
            #[inline]
            #vis fn #name(#receiver) -> ::tola_props::#variant<#binding_ty, #ty> {
                #binding.#body
            }
        })
    }
}

pub fn expand_derive_properties(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut methods = Vec::new();
    for attr in &input.attrs {
        if attr.path().is_ident("property") {
            let decl: PropertyDecl = attr.parse_args()?;
            methods.push(decl.expand()?);
        }
    }

    if methods.is_empty() {
        return Err(syn::Error::new(
            ident.span(),
            "#[derive(Properties)] needs at least one #[property(..)] attribute",
        ));
    }

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    })
}
