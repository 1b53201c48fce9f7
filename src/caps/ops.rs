//! Operator-kind markers.
//!
//! Each forwardable operator is a zero-sized marker type. Markers carry no
//! behavior themselves; they only select the `Forward` impl for their
//! operator.

/// An operator kind that a property can forward.
pub trait Operator: 'static {}

macro_rules! define_operators {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl Operator for $name {}
        )*
    };
}

define_operators! {
    /// `a + b`
    OpAdd;
    /// `a - b`
    OpSub;
    /// `a * b`
    OpMul;
    /// `a / b`
    OpDiv;
    /// `a % b`
    OpRem;
    /// `a == b`
    OpEq;
    /// `a != b`
    OpNe;
    /// `a < b`
    OpLt;
    /// `a <= b`
    OpLe;
    /// `a > b`
    OpGt;
    /// `a >= b`
    OpGe;
    /// `a & b`
    OpBitAnd;
    /// `a | b`
    OpBitOr;
    /// `a ^ b`
    OpBitXor;
    /// `a << b`
    OpShl;
    /// `a >> b`
    OpShr;
    /// `a && b`
    OpAnd;
    /// `a || b`
    OpOr;
    /// `a[b]`
    OpIndex;
    /// `!a`, also bitwise complement for integers
    OpNot;
    /// `-a`
    OpNeg;
    /// `+a`
    OpPos;
    /// `*a`
    OpDeref;
}
