//! Operands: whatever may stand on either side of a forwarded operator.
//!
//! A readable property contributes its value (one getter call), a registered
//! raw type contributes itself. Routing both through one trait keeps the
//! operator impls on [`Property`] free of overlap between "property ⊕ raw"
//! and "property ⊕ property".
//!
//! Raw types have to be registered with [`impl_operand!`](crate::impl_operand)
//! (or `#[derive(Operand)]`). Registration also generates the reversed forms,
//! so `raw ⊕ property` works too. Comparisons in that direction need the
//! property to hold the raw type itself; `&&` and `||` come from the
//! [`Operand::and`] and [`Operand::or`] methods.

use crate::binding::Get;
use crate::caps::{Forward, Forwarded, OpAnd, OpOr};

use super::Property;

/// A value that can feed a forwarded operator.
pub trait Operand {
    /// What the operator actually sees.
    type Value;

    fn into_operand(self) -> Self::Value;

    /// Used where only a borrow is available (`==`, `<`, ...).
    fn to_operand(&self) -> Self::Value;

    /// `self && rhs`. Both sides are read, as with an overloaded `&&`.
    ///
    /// ```
    /// use core::cell::Cell;
    /// use tola_props::prelude::*;
    ///
    /// let armed = Cell::new(true);
    /// let p = Bound::new(&armed).read_only(|c: &Cell<bool>| c.get());
    /// assert!(true.and(p));
    /// assert!(!false.and(p));
    /// ```
    #[inline]
    fn and<R: Operand>(&self, rhs: R) -> Forwarded<Self::Value, OpAnd, R::Value>
    where
        Self::Value: Forward<OpAnd, R::Value>,
    {
        <Self::Value as Forward<OpAnd, R::Value>>::forward(self.to_operand(), rhs.into_operand())
    }

    /// `self || rhs`. Both sides are read.
    #[inline]
    fn or<R: Operand>(&self, rhs: R) -> Forwarded<Self::Value, OpOr, R::Value>
    where
        Self::Value: Forward<OpOr, R::Value>,
    {
        <Self::Value as Forward<OpOr, R::Value>>::forward(self.to_operand(), rhs.into_operand())
    }
}

impl<B, T, G: Get<B, T>, S> Operand for Property<B, T, G, S> {
    type Value = T;

    #[inline(always)]
    fn into_operand(self) -> T {
        self.get()
    }

    #[inline(always)]
    fn to_operand(&self) -> T {
        self.get()
    }
}

impl<B, T, G: Get<B, T>, S> Operand for &Property<B, T, G, S> {
    type Value = T;

    #[inline(always)]
    fn into_operand(self) -> T {
        self.get()
    }

    #[inline(always)]
    fn to_operand(&self) -> T {
        (**self).get()
    }
}

/// Register raw types as operands.
///
/// ```
/// use core::cell::Cell;
/// use tola_props::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Volts(f32);
///
/// impl core::ops::Sub for Volts {
///     type Output = Volts;
///     fn sub(self, rhs: Volts) -> Volts { Volts(self.0 - rhs.0) }
/// }
///
/// tola_props::impl_operand!(Volts);
///
/// let rail = Cell::new(Volts(5.0));
/// let p = Bound::new(&rail).read_only(|c: &Cell<Volts>| c.get());
/// assert_eq!(&p - Volts(1.5), Volts(3.5));
/// assert_eq!(Volts(6.0) - &p, Volts(1.0));
/// assert!(p > Volts(3.3));
/// ```
///
/// Generic types list their parameters in brackets first:
///
/// ```
/// #[derive(Clone)]
/// struct Tagged<T>(T);
///
/// tola_props::impl_operand!([T: Clone] Tagged<T>);
/// ```
#[macro_export]
macro_rules! impl_operand {
    (@impl [$($g:tt)*] $ty:ty) => {
        impl<$($g)*> $crate::Operand for $ty
        where
            $ty: ::core::clone::Clone,
        {
            type Value = $ty;

            #[inline(always)]
            fn into_operand(self) -> $ty {
                self
            }

            #[inline(always)]
            fn to_operand(&self) -> $ty {
                ::core::clone::Clone::clone(self)
            }
        }

        $crate::__impl_reverse_ops!([$($g)*] $ty);
    };

    ([$($g:tt)*] $ty:ty) => {
        $crate::impl_operand!(@impl [$($g)*,] $ty);
    };

    ($($ty:ty),+ $(,)?) => {
        $($crate::impl_operand!(@impl [] $ty);)+
    };
}

/// `raw ⊕ property` for every forwarded std operator.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_reverse_ops {
    ($generics:tt $ty:ty) => {
        $crate::__impl_reverse_op!($generics $ty; Add add OpAdd);
        $crate::__impl_reverse_op!($generics $ty; Sub sub OpSub);
        $crate::__impl_reverse_op!($generics $ty; Mul mul OpMul);
        $crate::__impl_reverse_op!($generics $ty; Div div OpDiv);
        $crate::__impl_reverse_op!($generics $ty; Rem rem OpRem);
        $crate::__impl_reverse_op!($generics $ty; BitAnd bitand OpBitAnd);
        $crate::__impl_reverse_op!($generics $ty; BitOr bitor OpBitOr);
        $crate::__impl_reverse_op!($generics $ty; BitXor bitxor OpBitXor);
        $crate::__impl_reverse_op!($generics $ty; Shl shl OpShl);
        $crate::__impl_reverse_op!($generics $ty; Shr shr OpShr);
        $crate::__impl_reverse_cmp!($generics $ty);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_reverse_op {
    ([$($g:tt)*] $ty:ty; $Trait:ident $method:ident $Op:ident) => {
        impl<$($g)* __B, __T, __G, __S> ::core::ops::$Trait<$crate::Property<__B, __T, __G, __S>>
            for $ty
        where
            __G: $crate::binding::Get<__B, __T>,
            $ty: $crate::caps::Forward<$crate::caps::$Op, __T>,
        {
            type Output = $crate::caps::Forwarded<$ty, $crate::caps::$Op, __T>;

            #[inline(always)]
            fn $method(self, rhs: $crate::Property<__B, __T, __G, __S>) -> Self::Output {
                <$ty as $crate::caps::Forward<$crate::caps::$Op, __T>>::forward(self, rhs.get())
            }
        }

        impl<'__p, $($g)* __B, __T, __G, __S>
            ::core::ops::$Trait<&'__p $crate::Property<__B, __T, __G, __S>> for $ty
        where
            __G: $crate::binding::Get<__B, __T>,
            $ty: $crate::caps::Forward<$crate::caps::$Op, __T>,
        {
            type Output = $crate::caps::Forwarded<$ty, $crate::caps::$Op, __T>;

            #[inline(always)]
            fn $method(self, rhs: &'__p $crate::Property<__B, __T, __G, __S>) -> Self::Output {
                <$ty as $crate::caps::Forward<$crate::caps::$Op, __T>>::forward(self, rhs.get())
            }
        }
    };
}

/// `raw == property` and `raw < property` against a property of the same
/// value type. Pinning the value type keeps `$ty: PartialOrd<?>` from
/// resolving back into these impls.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_reverse_cmp {
    ([$($g:tt)*] $ty:ty) => {
        impl<$($g)* __B, __G, __S> ::core::cmp::PartialEq<$crate::Property<__B, $ty, __G, __S>>
            for $ty
        where
            __G: $crate::binding::Get<__B, $ty>,
            $ty: ::core::cmp::PartialEq,
        {
            #[inline]
            fn eq(&self, other: &$crate::Property<__B, $ty, __G, __S>) -> bool {
                ::core::cmp::PartialEq::eq(self, &other.get())
            }
        }

        impl<$($g)* __B, __G, __S> ::core::cmp::PartialOrd<$crate::Property<__B, $ty, __G, __S>>
            for $ty
        where
            __G: $crate::binding::Get<__B, $ty>,
            $ty: ::core::cmp::PartialOrd,
        {
            #[inline]
            fn partial_cmp(
                &self,
                other: &$crate::Property<__B, $ty, __G, __S>,
            ) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::cmp::PartialOrd::partial_cmp(self, &other.get())
            }
        }
    };
}

impl_operand!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char,
    core::time::Duration,
);

impl_operand!(['a] &'a str);
impl_operand!([T: Clone] core::num::Wrapping<T>);

#[cfg(feature = "alloc")]
impl_operand!(alloc::string::String);
