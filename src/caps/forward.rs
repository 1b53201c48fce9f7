//! The `Forward` capability: "does `T ⊕ U` compile, and what does it yield?"
//!
//! `T: Forward<Op, U>` holds exactly when the raw expression does, and
//! `Forward::Output` is the type the raw expression produces. Every impl is a
//! blanket impl over the std trait that backs the operator, so detection never
//! asks more of `T` or `U` than the operator itself does.
//!
//! Unary operators use `()` as the right operand.

use core::ops::{Deref, Index};

use super::numeric::Pos;
use super::ops::*;

/// Capability record for `(Self, Op, Rhs)`.
pub trait Forward<Op: Operator, Rhs = ()> {
    /// Result type of the raw expression.
    type Output;

    /// Evaluate the raw expression.
    fn forward(self, rhs: Rhs) -> Self::Output;
}

/// Result type of `T ⊕ Rhs`.
pub type Forwarded<T, Op, Rhs = ()> = <T as Forward<Op, Rhs>>::Output;

/// Forward a binary operator to the std trait of the same name.
macro_rules! forward_binary {
    ($($Trait:ident :: $method:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                impl<T, U> Forward<[<Op $Trait>], U> for T
                where
                    T: core::ops::$Trait<U>,
                {
                    type Output = <T as core::ops::$Trait<U>>::Output;

                    #[inline(always)]
                    fn forward(self, rhs: U) -> Self::Output {
                        core::ops::$Trait::$method(self, rhs)
                    }
                }
            )*
        }
    };
}

forward_binary!(
    Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem,
    BitAnd::bitand, BitOr::bitor, BitXor::bitxor,
    Shl::shl, Shr::shr,
);

/// Forward a comparison to `PartialEq` / `PartialOrd`.
macro_rules! forward_compare {
    ($($Op:ident => $Trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl<T, U> Forward<$Op, U> for T
            where
                T: $Trait<U>,
            {
                type Output = bool;

                #[inline(always)]
                fn forward(self, rhs: U) -> bool {
                    $Trait::$method(&self, &rhs)
                }
            }
        )*
    };
}

forward_compare!(
    OpEq => PartialEq::eq, OpNe => PartialEq::ne,
    OpLt => PartialOrd::lt, OpLe => PartialOrd::le,
    OpGt => PartialOrd::gt, OpGe => PartialOrd::ge,
);

impl<T, U> Forward<OpAnd, U> for T
where
    T: Into<bool>,
    U: Into<bool>,
{
    type Output = bool;

    #[inline(always)]
    fn forward(self, rhs: U) -> bool {
        self.into() && rhs.into()
    }
}

impl<T, U> Forward<OpOr, U> for T
where
    T: Into<bool>,
    U: Into<bool>,
{
    type Output = bool;

    #[inline(always)]
    fn forward(self, rhs: U) -> bool {
        self.into() || rhs.into()
    }
}

// Indexing borrows from the container, which is a temporary here.
impl<T, U> Forward<OpIndex, U> for T
where
    T: Index<U>,
    <T as Index<U>>::Output: Clone,
{
    type Output = <T as Index<U>>::Output;

    #[inline(always)]
    fn forward(self, rhs: U) -> Self::Output {
        self[rhs].clone()
    }
}

impl<T: core::ops::Not> Forward<OpNot> for T {
    type Output = <T as core::ops::Not>::Output;

    #[inline(always)]
    fn forward(self, _: ()) -> Self::Output {
        !self
    }
}

impl<T: core::ops::Neg> Forward<OpNeg> for T {
    type Output = <T as core::ops::Neg>::Output;

    #[inline(always)]
    fn forward(self, _: ()) -> Self::Output {
        -self
    }
}

impl<T: Pos> Forward<OpPos> for T {
    type Output = <T as Pos>::Output;

    #[inline(always)]
    fn forward(self, _: ()) -> Self::Output {
        self.pos()
    }
}

// Same reasoning as indexing: the pointee is copied out of the temporary.
impl<T> Forward<OpDeref> for T
where
    T: Deref,
    <T as Deref>::Target: Clone,
{
    type Output = <T as Deref>::Target;

    #[inline(always)]
    fn forward(self, _: ()) -> Self::Output {
        (*self).clone()
    }
}
