//! Std operator impls on [`Property`].
//!
//! Each impl reads the property once, hands the value to [`Forward`], and
//! returns whatever the raw expression returns. Compound assignment reads
//! once, evaluates the right-hand side, then writes once. Slices and vectors
//! accept a readable property as their index.

use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use core::slice::SliceIndex;

use super::{Operand, Property};
use crate::binding::{Get, Set};
use crate::caps::*;

macro_rules! forward_binary_ops {
    ($($Trait:ident :: $method:ident => $Op:ident),* $(,)?) => {
        $(
            impl<B, T, G, S, U> $Trait<U> for Property<B, T, G, S>
            where
                G: Get<B, T>,
                U: Operand,
                T: Forward<$Op, U::Value>,
            {
                type Output = Forwarded<T, $Op, U::Value>;

                #[inline(always)]
                fn $method(self, rhs: U) -> Self::Output {
                    <T as Forward<$Op, U::Value>>::forward(self.get(), rhs.into_operand())
                }
            }

            impl<'p, B, T, G, S, U> $Trait<U> for &'p Property<B, T, G, S>
            where
                G: Get<B, T>,
                U: Operand,
                T: Forward<$Op, U::Value>,
            {
                type Output = Forwarded<T, $Op, U::Value>;

                #[inline(always)]
                fn $method(self, rhs: U) -> Self::Output {
                    <T as Forward<$Op, U::Value>>::forward(self.get(), rhs.into_operand())
                }
            }
        )*
    };
}

forward_binary_ops!(
    Add::add => OpAdd, Sub::sub => OpSub, Mul::mul => OpMul,
    Div::div => OpDiv, Rem::rem => OpRem,
    BitAnd::bitand => OpBitAnd, BitOr::bitor => OpBitOr, BitXor::bitxor => OpBitXor,
    Shl::shl => OpShl, Shr::shr => OpShr,
);

macro_rules! forward_assign_ops {
    ($($Trait:ident :: $method:ident => $Op:ident),* $(,)?) => {
        $(
            impl<B, T, G, S, U> $Trait<U> for Property<B, T, G, S>
            where
                G: Get<B, T>,
                S: Set<B, T>,
                U: Operand,
                T: Forward<$Op, U::Value>,
                Forwarded<T, $Op, U::Value>: Into<T>,
            {
                #[inline]
                fn $method(&mut self, rhs: U) {
                    let current = self.get();
                    let next = <T as Forward<$Op, U::Value>>::forward(current, rhs.into_operand());
                    self.set(next.into());
                }
            }
        )*
    };
}

forward_assign_ops!(
    AddAssign::add_assign => OpAdd, SubAssign::sub_assign => OpSub,
    MulAssign::mul_assign => OpMul, DivAssign::div_assign => OpDiv,
    RemAssign::rem_assign => OpRem,
    BitAndAssign::bitand_assign => OpBitAnd, BitOrAssign::bitor_assign => OpBitOr,
    BitXorAssign::bitxor_assign => OpBitXor,
    ShlAssign::shl_assign => OpShl, ShrAssign::shr_assign => OpShr,
);

macro_rules! forward_unary_ops {
    ($($Trait:ident :: $method:ident => $Op:ident),* $(,)?) => {
        $(
            impl<B, T, G, S> $Trait for Property<B, T, G, S>
            where
                G: Get<B, T>,
                T: Forward<$Op>,
            {
                type Output = Forwarded<T, $Op>;

                #[inline(always)]
                fn $method(self) -> Self::Output {
                    <T as Forward<$Op>>::forward(self.get(), ())
                }
            }

            impl<'p, B, T, G, S> $Trait for &'p Property<B, T, G, S>
            where
                G: Get<B, T>,
                T: Forward<$Op>,
            {
                type Output = Forwarded<T, $Op>;

                #[inline(always)]
                fn $method(self) -> Self::Output {
                    <T as Forward<$Op>>::forward(self.get(), ())
                }
            }
        )*
    };
}

forward_unary_ops!(Not::not => OpNot, Neg::neg => OpNeg);

// =============================================================================
// Comparison
// =============================================================================

impl<B, T, G, S, U> PartialEq<U> for Property<B, T, G, S>
where
    G: Get<B, T>,
    U: Operand,
    T: Forward<OpEq, U::Value, Output = bool> + Forward<OpNe, U::Value, Output = bool>,
{
    #[inline]
    fn eq(&self, other: &U) -> bool {
        <T as Forward<OpEq, U::Value>>::forward(self.get(), other.to_operand())
    }

    #[allow(clippy::partialeq_ne_impl)]
    #[inline]
    fn ne(&self, other: &U) -> bool {
        <T as Forward<OpNe, U::Value>>::forward(self.get(), other.to_operand())
    }
}

impl<B, T, G, S, U> PartialOrd<U> for Property<B, T, G, S>
where
    G: Get<B, T>,
    U: Operand,
    T: PartialOrd<U::Value>
        + Forward<OpEq, U::Value, Output = bool>
        + Forward<OpNe, U::Value, Output = bool>
        + Forward<OpLt, U::Value, Output = bool>
        + Forward<OpLe, U::Value, Output = bool>
        + Forward<OpGt, U::Value, Output = bool>
        + Forward<OpGe, U::Value, Output = bool>,
{
    #[inline]
    fn partial_cmp(&self, other: &U) -> Option<Ordering> {
        self.get().partial_cmp(&other.to_operand())
    }

    #[inline]
    fn lt(&self, other: &U) -> bool {
        <T as Forward<OpLt, U::Value>>::forward(self.get(), other.to_operand())
    }

    #[inline]
    fn le(&self, other: &U) -> bool {
        <T as Forward<OpLe, U::Value>>::forward(self.get(), other.to_operand())
    }

    #[inline]
    fn gt(&self, other: &U) -> bool {
        <T as Forward<OpGt, U::Value>>::forward(self.get(), other.to_operand())
    }

    #[inline]
    fn ge(&self, other: &U) -> bool {
        <T as Forward<OpGe, U::Value>>::forward(self.get(), other.to_operand())
    }
}

// =============================================================================
// Subscript with a property as the index
// =============================================================================

// `value[property]` reads the index once. `[T; N]` picks this up through its
// own impl that defers to `[T]`.
impl<T, B, I, G, S> Index<Property<B, I, G, S>> for [T]
where
    G: Get<B, I>,
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: Property<B, I, G, S>) -> &I::Output {
        &self[index.get()]
    }
}

#[cfg(feature = "alloc")]
impl<T, B, I, G, S> Index<Property<B, I, G, S>> for alloc::vec::Vec<T>
where
    G: Get<B, I>,
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: Property<B, I, G, S>) -> &I::Output {
        &self[index.get()]
    }
}

#[cfg(test)]
mod tests {
    use crate::binding::{Bound, Unbound};
    use core::cell::Cell;

    struct Tank {
        level: Cell<i32>,
        reads: Cell<u32>,
        writes: Cell<u32>,
    }

    impl Tank {
        fn new(level: i32) -> Self {
            Self {
                level: Cell::new(level),
                reads: Cell::new(0),
                writes: Cell::new(0),
            }
        }
    }

    fn read(t: &Tank) -> i32 {
        t.reads.set(t.reads.get() + 1);
        t.level.get()
    }

    fn write(t: &Tank, v: i32) {
        t.writes.set(t.writes.get() + 1);
        t.level.set(v)
    }

    #[test]
    fn test_binary_reads_once() {
        let tank = Tank::new(12);
        let p = Bound::new(&tank).read_write(read, write);
        assert_eq!(p + 3, 15);
        assert_eq!(p - 3, 9);
        assert_eq!(p * 2, 24);
        assert_eq!(p / 5, 2);
        assert_eq!(p % 5, 2);
        assert_eq!(p & 4, 4);
        assert_eq!(p | 1, 13);
        assert_eq!(p ^ 12, 0);
        assert_eq!(p << 1, 24);
        assert_eq!(p >> 2, 3);
        assert_eq!(tank.reads.get(), 10);
        assert_eq!(tank.writes.get(), 0);
    }

    #[test]
    fn test_property_with_property() {
        let a = Tank::new(6);
        let b = Tank::new(7);
        let pa = Bound::new(&a).read_only(read);
        let pb = Bound::new(&b).read_only(read);
        assert_eq!(pa * pb, 42);
        assert_eq!(&pa - &pb, -1);
        assert!(pa < pb);
        assert!(pa != pb);
        assert_eq!(a.reads.get(), 4);
        assert_eq!(b.reads.get(), 4);
    }

    #[test]
    fn test_compound_assignment_is_one_get_one_set() {
        let tank = Tank::new(10);
        let mut p = Bound::new(&tank).read_write(read, write);
        p += 5;
        assert_eq!(tank.reads.get(), 1);
        assert_eq!(tank.writes.get(), 1);
        p <<= 1;
        p -= 10;
        p %= 7;
        assert_eq!(tank.level.get(), 6);
        assert_eq!(tank.reads.get(), 4);
        assert_eq!(tank.writes.get(), 4);
    }

    #[test]
    fn test_unary() {
        let tank = Tank::new(5);
        let p = Bound::new(&tank).read_only(read);
        assert_eq!(-p, -5);
        assert_eq!(!&p, !5);
    }

    #[test]
    fn test_comparisons_on_static() {
        thread_local! {
            static LIMIT: Cell<u64> = const { Cell::new(100) };
        }
        let limit = Unbound.read_only(|| LIMIT.with(Cell::get));
        assert!(limit == 100u64);
        assert!(limit >= 100u64);
        assert!(limit > 99u64);
        assert!(limit <= 100u64);
        assert!(!(limit < 100u64));
        assert_eq!(limit.partial_cmp(&7u64), Some(core::cmp::Ordering::Greater));
    }
}
