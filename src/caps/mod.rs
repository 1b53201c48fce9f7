//! # Layer 1: Capability Detection
//!
//! Answers, per operator kind, "does `T ⊕ U` exist and what does it produce?"
//!
//! ```text
//! caps/
//! ├── ops.rs      - Operator-kind markers (OpAdd, OpLt, OpNeg, ...)
//! ├── forward.rs  - Forward<Op, U>: blanket impls over the std operator traits
//! └── numeric.rs  - Pos / One for operators without a std trait
//! ```
//!
//! Kinds are orthogonal: `T: Forward<OpAdd, U>` says nothing about
//! `T: Forward<OpLt, U>`. The façade in `property` bounds every forwarding
//! impl on the matching `Forward`, so an unsupported operator has no impl and
//! fails at compile time.
//!
//! ```
//! use tola_props::caps::{Forward, Forwarded, OpAdd, OpLt};
//!
//! fn sum<T: Forward<OpAdd, U>, U>(a: T, b: U) -> Forwarded<T, OpAdd, U> {
//!     a.forward(b)
//! }
//! assert_eq!(sum(2u64, 40u64), 42);
//!
//! let less: Forwarded<f32, OpLt, f32> = <f32 as Forward<OpLt, f32>>::forward(1.0, 2.0);
//! assert!(less);
//! ```

pub mod ops;
pub mod forward;
pub mod numeric;

pub use ops::*;
pub use forward::{Forward, Forwarded};
pub use numeric::{One, Pos};
