//! Accessor slots.
//!
//! A getter is anything that can produce a `T` through a binding, a setter
//! anything that can store one. Only the function-pointer shapes listed in the
//! binding table implement them, so an accessor with the wrong arity or owner
//! type is rejected at compile time. [`NoAccessor`] fills an empty slot and
//! implements neither trait.

use super::{Bound, BoundMut, Unbound};

/// Reads a `T` through binding `B`.
pub trait Get<B: ?Sized, T> {
    fn get(&self, binding: &B) -> T;
}

/// Writes a `T` through binding `B`.
pub trait Set<B: ?Sized, T> {
    fn set(&self, binding: &mut B, value: T);
}

/// Empty accessor slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoAccessor;

impl<'a, O: ?Sized, T> Get<Bound<'a, O>, T> for fn(&O) -> T {
    #[inline(always)]
    fn get(&self, binding: &Bound<'a, O>) -> T {
        (*self)(binding.get_owner())
    }
}

impl<'a, O: ?Sized, T> Set<Bound<'a, O>, T> for fn(&O, T) {
    #[inline(always)]
    fn set(&self, binding: &mut Bound<'a, O>, value: T) {
        (*self)(binding.get_owner(), value)
    }
}

impl<'a, O: ?Sized, T> Get<BoundMut<'a, O>, T> for fn(&O) -> T {
    #[inline(always)]
    fn get(&self, binding: &BoundMut<'a, O>) -> T {
        use super::InstanceBinding;
        (*self)(binding.owner())
    }
}

impl<'a, O: ?Sized, T> Set<BoundMut<'a, O>, T> for fn(&mut O, T) {
    #[inline(always)]
    fn set(&self, binding: &mut BoundMut<'a, O>, value: T) {
        (*self)(binding.owner_mut(), value)
    }
}

impl<T> Get<Unbound, T> for fn() -> T {
    #[inline(always)]
    fn get(&self, _: &Unbound) -> T {
        (*self)()
    }
}

impl<T> Set<Unbound, T> for fn(T) {
    #[inline(always)]
    fn set(&self, _: &mut Unbound, value: T) {
        (*self)(value)
    }
}
