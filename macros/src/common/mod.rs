// Common utilities shared between the derive macros
//
// This module contains:
// - parse_utils: keyword helpers for `#[property(..)]` option lists

mod parse_utils;

pub use parse_utils::*;
