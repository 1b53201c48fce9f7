#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: operand impls for alloc types in no_std
// - detect: autoref operator detection (Detect, op_check!)

//! # tola-props
//!
//! Accessor-backed properties that behave like plain values.
//!
//! A property stands in for a value of some type `T`, but every read goes
//! through a getter and every write through a setter. Arithmetic, comparison,
//! bitwise and unary operators on the property forward to the value, and only
//! exist when the value type supports them.
//!
//! ## Architecture
//!
//! ### 1. Capabilities
//! Each operator has a zero-sized marker. `T: Forward<Op, U>` holds exactly when
//! `T ⊕ U` compiles, and carries its result type.
//!
//! ```text
//! OpAdd ─┐
//! OpLt  ─┼─> Forward<Op, U> for T   where T: core::ops::Add<U> / PartialOrd<U> / ...
//! OpNeg ─┘        |
//!                 └─ Output = <T as core::ops::Add<U>>::Output
//! ```
//!
//! ### 2. Bindings
//! A property finds its owner through a borrow (`Bound`, `BoundMut`) or has
//! none at all (`Unbound`, static properties).
//!
//! ### 3. Façade
//! `Property<B, T, G, S>` combines a binding with a getter slot and a setter
//! slot. The filled slots decide which methods and operators exist.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, Present, Absent                                          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities                                            |
//! |  - Operator markers, Forward, Pos, One                            |
//! |  - Detect / op_check! (feature "detect")                          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Bindings                                                |
//! |  - Bound, BoundMut, Unbound, Get, Set                             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Property Façade                                         |
//! |  - Property, Operand, FieldAccess, Initializer, derives           |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use core::cell::Cell;
//! use tola_props::prelude::*;
//!
//! #[derive(Properties)]
//! #[property(celsius: f64, get = Sensor::read, set = Sensor::calibrate)]
//! #[property(fahrenheit: f64, get = Sensor::read_f)]
//! struct Sensor {
//!     raw: Cell<f64>,
//! }
//!
//! impl Sensor {
//!     fn read(&self) -> f64 { self.raw.get() }
//!     fn calibrate(&self, v: f64) { self.raw.set(v) }
//!     fn read_f(&self) -> f64 { self.raw.get() * 1.8 + 32.0 }
//! }
//!
//! let sensor = Sensor { raw: Cell::new(20.0) };
//! let mut c = sensor.celsius();
//! c += 5.0;
//!
//! assert_eq!(sensor.fahrenheit(), 77.0);
//! assert!(sensor.celsius() > 24.0);
//! ```
//!
//! ## Unsuffixed literals
//!
//! Right operands are generic, so an unsuffixed integer literal falls back to
//! `i32`. For other value types suffix it: `byte_prop + 5u8`.

// Allow `::tola_props` to work inside the crate itself
extern crate self as tola_props;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for macro_rules generators
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capabilities
// =============================================================================
pub mod caps;

#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Layer 2: Bindings
// =============================================================================
pub mod binding;

// =============================================================================
// Layer 3: Property Façade
// =============================================================================
pub mod property;

pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use binding::{Binding, Bound, BoundMut, Get, InstanceBinding, NoAccessor, Set, Unbound};
pub use error::{AccessKind, PropertyError, PropertyResult};
pub use primitives::bool::{Absent, Bool, Present};
pub use property::{FieldAccess, Initializer, Operand, Property, ReadOnly, ReadWrite, WriteOnly};

// Re-export proc-macros
pub use macros::{Operand, Properties};

/// Common items for declaring and using properties.
pub mod prelude {
    pub use crate::binding::{Binding, Bound, BoundMut, InstanceBinding, Unbound};
    pub use crate::property::{
        FieldAccess, Initializer, Operand, Property, ReadOnly, ReadWrite, WriteOnly,
    };
    pub use crate::error::PropertyError;
    pub use macros::{Operand, Properties};
    // Note: impl_operand!, op_check! are #[macro_export] so they're at crate root
}
