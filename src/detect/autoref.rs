//! Autoref-based operator detection machinery.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time operator detection on concrete types.
//!
//! ## How it works
//!
//! 1. A fallback trait carries `const FORWARDABLE: bool = false`
//! 2. The fallback is implemented for `Detect<T, Op, U>` for all inputs
//! 3. An inherent const `FORWARDABLE = true` exists where `T: Forward<Op, U>`
//!
//! When resolving `Detect::<Concrete, Op, U>::FORWARDABLE`, the compiler:
//! - If `Concrete: Forward<Op, U>`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`; there, bound on
//! `Forward` directly.

use core::marker::PhantomData;

use crate::caps::{Forward, Operator};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized, Op, U = ()>(PhantomData<(PhantomData<T>, Op, U)>);

#[doc(hidden)]
pub trait ForwardFallback {
    const FORWARDABLE: bool = false;
}

impl<T: ?Sized, Op, U> ForwardFallback for Detect<T, Op, U> {}

impl<T, Op, U> Detect<T, Op, U>
where
    Op: Operator,
    T: Forward<Op, U>,
{
    pub const FORWARDABLE: bool = true;
}

/// Check whether an operator is forwardable for concrete operand types.
///
/// Binary form `op_check!(T: Kind<U>)`, unary form `op_check!(T: Kind)`.
/// `Kind` is the operator marker without its `Op` prefix.
///
/// ```
/// use tola_props::op_check;
///
/// assert!(op_check!(i32: Add<i32>));
/// assert!(op_check!(u64: Shl<u8>));
/// assert!(op_check!(bool: And<bool>));
/// assert!(op_check!(i32: Neg));
/// assert!(!op_check!(u32: Neg));
/// assert!(!op_check!(String: Sub<String>));
/// ```
#[macro_export]
macro_rules! op_check {
    ($t:ty : $op:ident < $u:ty >) => {{
        #[allow(unused_imports)]
        use $crate::detect::ForwardFallback as _;
        $crate::paste::paste! {
            $crate::detect::Detect::<$t, $crate::caps::[<Op $op>], $u>::FORWARDABLE
        }
    }};
    ($t:ty : $op:ident) => {{
        #[allow(unused_imports)]
        use $crate::detect::ForwardFallback as _;
        $crate::paste::paste! {
            $crate::detect::Detect::<$t, $crate::caps::[<Op $op>], ()>::FORWARDABLE
        }
    }};
}
