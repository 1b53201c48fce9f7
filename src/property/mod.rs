//! # Layer 3: Property Façade
//!
//! A [`Property`] stands in for a value of type `T` whose storage lives behind
//! a getter and/or a setter. It is a small view: a binding (the owner-locator)
//! plus two accessor slots.
//!
//! ```text
//! Property<B, T, G, S>
//!          |  |  |  +-- setter slot: B::Setter<T> or NoAccessor
//!          |  |  +----- getter slot: B::Getter<T> or NoAccessor
//!          |  +-------- value type
//!          +----------- Bound / BoundMut / Unbound
//! ```
//!
//! Which slots are filled decides what exists on the type:
//!
//! | Variant | `get` | `set` | non-mutating operators | compound assignment, inc/dec |
//! |---------|-------|-------|------------------------|------------------------------|
//! | [`ReadWrite`] | yes | yes | yes | yes |
//! | [`ReadOnly`] | yes | no | yes | no |
//! | [`WriteOnly`] | no | yes | no | no |
//!
//! Every operator is additionally gated on the value type through
//! [`Forward`]: if `T ⊕ U` does not compile, `property ⊕ U` does not either.
//!
//! ```
//! use core::cell::Cell;
//! use tola_props::prelude::*;
//!
//! struct Thermostat {
//!     celsius: Cell<f64>,
//! }
//!
//! impl Thermostat {
//!     fn fahrenheit(&self) -> ReadWrite<Bound<'_, Self>, f64> {
//!         Bound::new(self).read_write(
//!             |t| t.celsius.get() * 9.0 / 5.0 + 32.0,
//!             |t, f| t.celsius.set((f - 32.0) * 5.0 / 9.0),
//!         )
//!     }
//! }
//!
//! let t = Thermostat { celsius: Cell::new(100.0) };
//! assert_eq!(t.fahrenheit(), 212.0);
//!
//! let mut f = t.fahrenheit();
//! f -= 180.0;
//! assert_eq!(t.celsius.get(), 0.0);
//! assert!(t.fahrenheit() < 33.0);
//! ```
//!
//! Operators the value type lacks are absent:
//!
//! ```compile_fail,E0277
//! use core::cell::Cell;
//! use tola_props::prelude::*;
//!
//! #[derive(Clone, Copy, PartialEq)]
//! struct Money(i64);
//!
//! impl core::ops::Add for Money {
//!     type Output = Money;
//!     fn add(self, rhs: Money) -> Money { Money(self.0 + rhs.0) }
//! }
//! tola_props::impl_operand!(Money);
//!
//! fn ordered<P: PartialOrd<Money>>(_: &P) {}
//!
//! struct Wallet { balance: Cell<Money> }
//!
//! let wallet = Wallet { balance: Cell::new(Money(10)) };
//! let balance = Bound::new(&wallet).read_only(|w: &Wallet| w.balance.get());
//! ordered(&balance); // Money has no PartialOrd
//! ```
//!
//! Read-only properties have no setter:
//!
//! ```compile_fail,E0599
//! use core::cell::Cell;
//! use tola_props::prelude::*;
//!
//! let cell = Cell::new(1);
//! let mut p = Bound::new(&cell).read_only(|c: &Cell<i32>| c.get());
//! p.set(2);
//! ```
//!
//! nor compound assignment:
//!
//! ```compile_fail,E0277
//! use core::cell::Cell;
//! use core::ops::AddAssign;
//! use tola_props::prelude::*;
//!
//! fn bump<P: AddAssign<i32>>(p: &mut P) { *p += 2; }
//!
//! let cell = Cell::new(1);
//! let mut p = Bound::new(&cell).read_only(|c: &Cell<i32>| c.get());
//! bump(&mut p);
//! ```
//!
//! nor increment and decrement:
//!
//! ```compile_fail,E0599
//! use core::cell::Cell;
//! use tola_props::prelude::*;
//!
//! let cell = Cell::new(1);
//! let mut p = Bound::new(&cell).read_only(|c: &Cell<i32>| c.get());
//! p.pre_inc();
//! ```
//!
//! ```compile_fail,E0599
//! use core::cell::Cell;
//! use tola_props::prelude::*;
//!
//! let cell = Cell::new(1);
//! let mut p = Bound::new(&cell).read_only(|c: &Cell<i32>| c.get());
//! let _ = p.post_inc();
//! ```
//!
//! Write-only properties have no getter, and nothing that reads:
//!
//! ```compile_fail,E0599
//! use core::cell::Cell;
//! use tola_props::prelude::*;
//!
//! let cell = Cell::new(1);
//! let p = Bound::new(&cell).write_only(|c: &Cell<i32>, v| c.set(v));
//! let _ = p.get();
//! ```
//!
//! ```compile_fail,E0277
//! use core::cell::Cell;
//! use core::ops::Add;
//! use tola_props::prelude::*;
//!
//! fn plus_one<P: Add<i32>>(p: P) -> P::Output { p + 1 }
//!
//! let cell = Cell::new(1);
//! let p = Bound::new(&cell).write_only(|c: &Cell<i32>, v| c.set(v));
//! let _ = plus_one(p);
//! ```

mod fields;
mod forwarding;
mod init;
mod operand;

pub use fields::FieldAccess;
pub use init::Initializer;
pub use operand::Operand;

use core::fmt;
use core::marker::PhantomData;

use crate::binding::{Binding, Bound, BoundMut, Get, InstanceBinding, NoAccessor, Set, Unbound};
use crate::caps::{Forward, Forwarded, One, OpAdd, OpAnd, OpDeref, OpIndex, OpOr, OpPos, OpSub};

/// Accessor-backed stand-in for a value of type `T`.
pub struct Property<B, T, G = NoAccessor, S = NoAccessor> {
    binding: B,
    getter: G,
    setter: S,
    _value: PhantomData<fn(T) -> T>,
}

/// Property with both accessors.
pub type ReadWrite<B, T> = Property<B, T, <B as Binding>::Getter<T>, <B as Binding>::Setter<T>>;

/// Property with a getter only.
pub type ReadOnly<B, T> = Property<B, T, <B as Binding>::Getter<T>, NoAccessor>;

/// Property with a setter only.
pub type WriteOnly<B, T> = Property<B, T, NoAccessor, <B as Binding>::Setter<T>>;

impl<B: Clone, T, G: Clone, S: Clone> Clone for Property<B, T, G, S> {
    fn clone(&self) -> Self {
        Property::from_parts(self.binding.clone(), self.getter.clone(), self.setter.clone())
    }
}

// Shared and static bindings are Copy, exclusive ones are not.
impl<B: Copy, T, G: Copy, S: Copy> Copy for Property<B, T, G, S> {}

// =============================================================================
// Construction
// =============================================================================

impl<B: Binding, T> Property<B, T, B::Getter<T>, B::Setter<T>> {
    pub fn read_write(binding: B, getter: B::Getter<T>, setter: B::Setter<T>) -> Self {
        Property::from_parts(binding, getter, setter)
    }
}

impl<B: Binding, T> Property<B, T, B::Getter<T>, NoAccessor> {
    pub fn read_only(binding: B, getter: B::Getter<T>) -> Self {
        Property::from_parts(binding, getter, NoAccessor)
    }
}

impl<B: Binding, T> Property<B, T, NoAccessor, B::Setter<T>> {
    pub fn write_only(binding: B, setter: B::Setter<T>) -> Self {
        Property::from_parts(binding, NoAccessor, setter)
    }
}

impl<B, T, G, S> Property<B, T, G, S> {
    #[inline(always)]
    fn from_parts(binding: B, getter: G, setter: S) -> Self {
        Self {
            binding,
            getter,
            setter,
            _value: PhantomData,
        }
    }

    /// The owner-locator this property was constructed with.
    #[inline(always)]
    pub fn binding(&self) -> &B {
        &self.binding
    }

    #[inline(always)]
    pub fn is_static(&self) -> bool
    where
        B: Binding,
    {
        self.binding.is_static()
    }

    /// The aggregate the accessors operate on. Absent for static properties.
    #[inline(always)]
    pub fn owner(&self) -> &B::Owner
    where
        B: InstanceBinding,
    {
        self.binding.owner()
    }
}

/// Constructors with concrete accessor signatures, so closures and methods
/// coerce without annotations.
macro_rules! binding_constructors {
    ($(#[$meta:meta])* impl[$($lt:lifetime)?] $binding:ty => get: $getter:ty, set: $setter:ty) => {
        $(#[$meta])*
        impl<$($lt,)? O: ?Sized> $binding {
            pub fn read_write<T>(self, getter: $getter, setter: $setter) -> ReadWrite<Self, T> {
                Property::from_parts(self, getter, setter)
            }

            pub fn read_only<T>(self, getter: $getter) -> ReadOnly<Self, T> {
                Property::from_parts(self, getter, NoAccessor)
            }

            pub fn write_only<T>(self, setter: $setter) -> WriteOnly<Self, T> {
                Property::from_parts(self, NoAccessor, setter)
            }

            /// Start an [`Initializer`] with no accessors filled in.
            pub fn init<T>(self) -> Initializer<Self, T> {
                Initializer::new(self)
            }
        }
    };
}

binding_constructors!(impl['a] Bound<'a, O> => get: fn(&O) -> T, set: fn(&O, T));
binding_constructors!(impl['a] BoundMut<'a, O> => get: fn(&O) -> T, set: fn(&mut O, T));

impl Unbound {
    pub fn read_write<T>(self, getter: fn() -> T, setter: fn(T)) -> ReadWrite<Self, T> {
        Property::from_parts(self, getter, setter)
    }

    pub fn read_only<T>(self, getter: fn() -> T) -> ReadOnly<Self, T> {
        Property::from_parts(self, getter, NoAccessor)
    }

    pub fn write_only<T>(self, setter: fn(T)) -> WriteOnly<Self, T> {
        Property::from_parts(self, NoAccessor, setter)
    }

    pub fn init<T>(self) -> Initializer<Self, T> {
        Initializer::new(self)
    }
}

// =============================================================================
// Reading
// =============================================================================

impl<B, T, G: Get<B, T>, S> Property<B, T, G, S> {
    /// Call the getter. Never cached.
    #[inline(always)]
    pub fn get(&self) -> T {
        self.getter.get(&self.binding)
    }

    /// Read and convert implicitly (`T: Into<U>`).
    #[inline]
    pub fn get_as<U>(&self) -> U
    where
        T: Into<U>,
    {
        self.get().into()
    }

    /// Read and convert explicitly (`T: TryInto<U>`).
    #[inline]
    pub fn try_get_as<U>(&self) -> Result<U, <T as TryInto<U>>::Error>
    where
        T: TryInto<U>,
    {
        self.get().try_into()
    }

    /// Fetch a copy of the value for field access.
    ///
    /// Mutations through the returned [`FieldAccess`] only touch the copy.
    #[inline]
    pub fn fields(&self) -> FieldAccess<T> {
        FieldAccess::new(self.get())
    }

    /// `value[index]`, returning the element by value.
    #[inline]
    pub fn at<I>(&self, index: I) -> Forwarded<T, OpIndex, I>
    where
        T: Forward<OpIndex, I>,
    {
        <T as Forward<OpIndex, I>>::forward(self.get(), index)
    }

    /// `value && rhs`
    #[inline]
    pub fn and<U: Operand>(&self, rhs: U) -> Forwarded<T, OpAnd, U::Value>
    where
        T: Forward<OpAnd, U::Value>,
    {
        <T as Forward<OpAnd, U::Value>>::forward(self.get(), rhs.into_operand())
    }

    /// `value || rhs`
    #[inline]
    pub fn or<U: Operand>(&self, rhs: U) -> Forwarded<T, OpOr, U::Value>
    where
        T: Forward<OpOr, U::Value>,
    {
        <T as Forward<OpOr, U::Value>>::forward(self.get(), rhs.into_operand())
    }

    /// `+value`
    #[inline]
    pub fn pos(&self) -> Forwarded<T, OpPos>
    where
        T: Forward<OpPos>,
    {
        <T as Forward<OpPos>>::forward(self.get(), ())
    }

    /// `*value`, returning the pointee by value.
    #[inline]
    pub fn deref_value(&self) -> Forwarded<T, OpDeref>
    where
        T: Forward<OpDeref>,
    {
        <T as Forward<OpDeref>>::forward(self.get(), ())
    }
}

// =============================================================================
// Writing
// =============================================================================

impl<B, T, G, S: Set<B, T>> Property<B, T, G, S> {
    /// Call the setter.
    #[inline(always)]
    pub fn set(&mut self, value: T) {
        self.setter.set(&mut self.binding, value)
    }

    /// Assign from a plain value or another readable property.
    #[inline]
    pub fn assign<U>(&mut self, other: U) -> &mut Self
    where
        U: Operand<Value = T>,
    {
        self.set(other.into_operand());
        self
    }
}

// =============================================================================
// Read-modify-write
// =============================================================================

impl<B, T, G: Get<B, T>, S: Set<B, T>> Property<B, T, G, S> {
    /// One `get`, then one `set` with the result of `f`.
    #[inline]
    pub fn update<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(T) -> T,
    {
        let next = f(self.get());
        self.set(next);
        self
    }

    /// `++value`
    pub fn pre_inc(&mut self) -> &mut Self
    where
        T: One + Forward<OpAdd, T>,
        Forwarded<T, OpAdd, T>: Into<T>,
    {
        self.update(|value| <T as Forward<OpAdd, T>>::forward(value, T::one()).into())
    }

    /// `--value`
    pub fn pre_dec(&mut self) -> &mut Self
    where
        T: One + Forward<OpSub, T>,
        Forwarded<T, OpSub, T>: Into<T>,
    {
        self.update(|value| <T as Forward<OpSub, T>>::forward(value, T::one()).into())
    }

    /// `value++`: returns the value read before the write.
    pub fn post_inc(&mut self) -> T
    where
        T: Clone + One + Forward<OpAdd, T>,
        Forwarded<T, OpAdd, T>: Into<T>,
    {
        let old = self.get();
        self.set(<T as Forward<OpAdd, T>>::forward(old.clone(), T::one()).into());
        old
    }

    /// `value--`: returns the value read before the write.
    pub fn post_dec(&mut self) -> T
    where
        T: Clone + One + Forward<OpSub, T>,
        Forwarded<T, OpSub, T>: Into<T>,
    {
        let old = self.get();
        self.set(<T as Forward<OpSub, T>>::forward(old.clone(), T::one()).into());
        old
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<B, T: fmt::Debug, G: Get<B, T>, S> fmt::Debug for Property<B, T, G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

impl<B, T: fmt::Display, G: Get<B, T>, S> fmt::Display for Property<B, T, G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Counter {
        hits: Cell<u32>,
    }

    impl Counter {
        fn hits(&self) -> ReadWrite<Bound<'_, Self>, u32> {
            Bound::new(self).read_write(|c| c.hits.get(), |c, v| c.hits.set(v))
        }
    }

    #[test]
    fn test_generic_constructor() {
        fn read(c: &Counter) -> u32 {
            c.hits.get()
        }
        fn write(c: &Counter, v: u32) {
            c.hits.set(v)
        }

        let counter = Counter { hits: Cell::new(2) };
        let getter: fn(&Counter) -> u32 = read;
        let setter: fn(&Counter, u32) = write;
        let mut hits = Property::read_write(Bound::new(&counter), getter, setter);
        hits.set(9);
        assert_eq!(hits.get(), 9);
        assert!(!hits.is_static());
        assert!(core::ptr::eq(hits.owner(), &counter));
    }

    #[test]
    fn test_update_reads_once() {
        let counter = Counter { hits: Cell::new(4) };
        counter.hits().update(|v| v * 10);
        assert_eq!(counter.hits.get(), 40);
    }

    #[test]
    fn test_conversions() {
        let counter = Counter { hits: Cell::new(300) };
        let wide: u64 = counter.hits().get_as();
        assert_eq!(wide, 300);
        assert!(counter.hits().try_get_as::<u8>().is_err());
        assert_eq!(counter.hits().try_get_as::<u16>(), Ok(300));
    }

    #[test]
    fn test_formatting_forwards_to_value() {
        extern crate std;
        use std::format;

        let counter = Counter { hits: Cell::new(7) };
        assert_eq!(format!("{}", counter.hits()), "7");
        assert_eq!(format!("{:?}", counter.hits()), "7");
    }
}
