//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Bindings use these as compile-time flags, e.g. whether a binding is static.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
}

impl Bool for Absent {
    const VALUE: bool = false;
}
