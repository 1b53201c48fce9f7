//! # Layer 0: Primitives
//!
//! Basic building blocks shared by the upper layers:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).

pub mod bool;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present};
