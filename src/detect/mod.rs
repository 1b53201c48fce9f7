//! # Layer 1b: Operator Detection
//!
//! Turns the `Forward` capability into a `bool` for concrete types, so the
//! capability record of `(T, Op, U)` can be inspected as a value.
//!
//! ```
//! use tola_props::detect::{Detect, ForwardFallback};
//! use tola_props::caps::{OpAdd, OpLt};
//!
//! #[derive(Clone, PartialEq)]
//! struct Meters(f64);
//!
//! impl core::ops::Add for Meters {
//!     type Output = Meters;
//!     fn add(self, rhs: Meters) -> Meters { Meters(self.0 + rhs.0) }
//! }
//!
//! assert!(Detect::<Meters, OpAdd, Meters>::FORWARDABLE);
//! assert!(!Detect::<Meters, OpLt, Meters>::FORWARDABLE);
//! ```

pub mod autoref;

pub use autoref::{Detect, ForwardFallback};
