//! Procedural macros for tola-props
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Operand)]` | struct/enum | Register a value type as an operator operand |
//! | `#[derive(Properties)]` | struct | Generate property accessor methods |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Properties)]
//! #[property(pub count: i32, get = Counter::read, set = Counter::write)]
//! #[property(doubled: i32, get = Counter::doubled)]
//! struct Counter {
//!     value: Cell<i32>,
//! }
//!
//! counter.count() += 1;
//! assert_eq!(counter.doubled(), 2);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro to use a type on either side of a property operator.
///
/// Expands to a call to the `impl_operand!` bridge, which implements
/// `Operand` and the reversed operator forms (`value ⊕ property`).
/// The type must be `Clone`.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, PartialEq, Operand)]
/// struct Meters(f64);
///
/// #[derive(Clone, Operand)]
/// struct Tagged<T>(T);
/// ```
#[proc_macro_derive(Operand)]
pub fn derive_operand(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_operand(input).into()
}

/// Derive macro generating one accessor method per `#[property(..)]`.
///
/// # Syntax
/// ```ignore
/// #[property(<vis> <name>: <Type>, get = <path>, set = <path>, mutable)]
/// ```
///
/// - `get` and `set` given: read-write property
/// - only `get`: read-only property
/// - only `set`: write-only property
/// - `mutable`: the method takes `&mut self` and the setter `fn(&mut Self, T)`
#[proc_macro_derive(Properties, attributes(property))]
pub fn derive_properties(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_properties(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
