//! Common parsing utilities
//!
//! Shared parsing helpers for consistent attribute syntax.

use syn::{Ident, Token, parse::ParseStream};

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is a specific keyword
pub fn peek_keyword(input: ParseStream, keyword: &str) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            return ident == keyword;
        }
    }
    false
}

/// Consume an identifier if it matches the keyword
pub fn try_parse_keyword(input: ParseStream, keyword: &str) -> syn::Result<bool> {
    if peek_keyword(input, keyword) {
        let _: Ident = input.parse()?;
        Ok(true)
    } else {
        Ok(false)
    }
}

// =============================================================================
// Option Lists
// =============================================================================

/// Consume a separating comma. Returns `false` at the end of input, so a
/// trailing comma is accepted.
pub fn next_option(input: ParseStream) -> syn::Result<bool> {
    if input.is_empty() {
        return Ok(false);
    }
    input.parse::<Token![,]>()?;
    Ok(!input.is_empty())
}

/// Parse `key = <value>` after the key has been read, rejecting a repeat.
pub fn parse_unique_value<T: syn::parse::Parse>(
    input: ParseStream,
    key: &Ident,
    slot: &mut Option<T>,
) -> syn::Result<()> {
    input.parse::<Token![=]>()?;
    let value: T = input.parse()?;
    if slot.is_some() {
        return Err(syn::Error::new(key.span(), format!("duplicate `{key}` option")));
    }
    *slot = Some(value);
    Ok(())
}
