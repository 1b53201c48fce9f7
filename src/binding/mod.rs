//! # Layer 2: Owner Binding
//!
//! How a property finds the aggregate its accessors operate on.
//!
//! | Binding | Owner-locator | Getter | Setter |
//! |---------|---------------|--------|--------|
//! | [`Bound<'a, O>`] | `&'a O` | `fn(&O) -> T` | `fn(&O, T)` |
//! | [`BoundMut<'a, O>`] | `&'a mut O` | `fn(&O) -> T` | `fn(&mut O, T)` |
//! | [`Unbound`] | none (static) | `fn() -> T` | `fn(T)` |
//!
//! The locator is a borrow, so a property can neither outlive its owner nor be
//! re-pointed at another one after construction. `Bound` shares the owner
//! (setters need interior mutability, e.g. `Cell`), `BoundMut` holds it
//! exclusively (setters write plain fields).

mod accessor;

pub use accessor::{Get, NoAccessor, Set};

use crate::primitives::{Absent, Bool, Present};

/// Owner-locator strategy of a property.
pub trait Binding {
    /// The aggregate accessors receive. `()` for static bindings.
    type Owner: ?Sized;

    /// `Present` for static bindings, fixed for the lifetime of the type.
    type IsStatic: Bool;

    /// Getter function type for a value of type `T`.
    type Getter<T>: Get<Self, T> + Copy;

    /// Setter function type for a value of type `T`.
    type Setter<T>: Set<Self, T> + Copy;

    #[inline(always)]
    fn is_static(&self) -> bool {
        <Self::IsStatic as Bool>::VALUE
    }
}

/// Bindings that resolve to an owner instance.
pub trait InstanceBinding: Binding {
    fn owner(&self) -> &Self::Owner;
}

// =============================================================================
// Bound: shared owner
// =============================================================================

/// Instance binding through a shared borrow of the owner.
pub struct Bound<'a, O: ?Sized> {
    owner: &'a O,
}

impl<'a, O: ?Sized> Bound<'a, O> {
    #[inline(always)]
    pub fn new(owner: &'a O) -> Self {
        Self { owner }
    }

    /// The owner, with the full borrow lifetime.
    #[inline(always)]
    pub fn get_owner(&self) -> &'a O {
        self.owner
    }
}

impl<O: ?Sized> Clone for Bound<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for Bound<'_, O> {}

impl<'a, O: ?Sized> Binding for Bound<'a, O> {
    type Owner = O;
    type IsStatic = Absent;
    type Getter<T> = fn(&O) -> T;
    type Setter<T> = fn(&O, T);
}

impl<O: ?Sized> InstanceBinding for Bound<'_, O> {
    #[inline(always)]
    fn owner(&self) -> &O {
        self.owner
    }
}

// =============================================================================
// BoundMut: exclusive owner
// =============================================================================

/// Instance binding through an exclusive borrow of the owner.
pub struct BoundMut<'a, O: ?Sized> {
    owner: &'a mut O,
}

impl<'a, O: ?Sized> BoundMut<'a, O> {
    #[inline(always)]
    pub fn new(owner: &'a mut O) -> Self {
        Self { owner }
    }

    #[inline(always)]
    pub fn owner_mut(&mut self) -> &mut O {
        &mut *self.owner
    }
}

impl<'a, O: ?Sized> Binding for BoundMut<'a, O> {
    type Owner = O;
    type IsStatic = Absent;
    type Getter<T> = fn(&O) -> T;
    type Setter<T> = fn(&mut O, T);
}

impl<O: ?Sized> InstanceBinding for BoundMut<'_, O> {
    #[inline(always)]
    fn owner(&self) -> &O {
        &*self.owner
    }
}

// =============================================================================
// Unbound: static property
// =============================================================================

/// Static binding: no owner, accessors are free functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbound;

impl Binding for Unbound {
    type Owner = ();
    type IsStatic = Present;
    type Getter<T> = fn() -> T;
    type Setter<T> = fn(T);
}
