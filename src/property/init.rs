//! Runtime-checked construction.
//!
//! The binding constructors (`Bound::read_write` and friends) make a missing
//! accessor a type error. [`Initializer`] is for code that only knows at
//! runtime which accessors it has: slots are optional until `build_*`, which
//! rejects a missing required accessor with [`PropertyError`].
//!
//! ```
//! use core::cell::Cell;
//! use tola_props::prelude::*;
//!
//! let cell = Cell::new(3u16);
//! let p = Initializer::of(&cell)
//!     .getter(|c| c.get())
//!     .build_read_only()
//!     .unwrap();
//! assert_eq!(p.get(), 3);
//!
//! let err = Initializer::<_, u16>::of(&cell).build_read_write().unwrap_err();
//! assert_eq!(err.to_string(), "read-write property requires a getter, none was supplied");
//! ```

use core::any::type_name;

use super::{Property, ReadOnly, ReadWrite, WriteOnly};
use crate::binding::{Binding, Bound, BoundMut, NoAccessor, Unbound};
use crate::error::{AccessKind, PropertyError, PropertyResult};

/// Builder holding a binding and optional accessors.
pub struct Initializer<B: Binding, T> {
    binding: B,
    getter: Option<B::Getter<T>>,
    setter: Option<B::Setter<T>>,
}

impl<'a, O: ?Sized, T> Initializer<Bound<'a, O>, T> {
    /// Shared instance binding.
    pub fn of(owner: &'a O) -> Self {
        Self::new(Bound::new(owner))
    }
}

impl<'a, O: ?Sized, T> Initializer<BoundMut<'a, O>, T> {
    /// Exclusive instance binding.
    pub fn of_mut(owner: &'a mut O) -> Self {
        Self::new(BoundMut::new(owner))
    }
}

impl<T> Initializer<Unbound, T> {
    /// Static binding.
    pub fn statik() -> Self {
        Self::new(Unbound)
    }
}

impl<B: Binding, T> Initializer<B, T> {
    pub fn new(binding: B) -> Self {
        Self {
            binding,
            getter: None,
            setter: None,
        }
    }

    pub fn getter(mut self, getter: B::Getter<T>) -> Self {
        self.getter = Some(getter);
        self
    }

    pub fn setter(mut self, setter: B::Setter<T>) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn build_read_write(self) -> PropertyResult<ReadWrite<B, T>> {
        const KIND: AccessKind = AccessKind::ReadWrite;

        let Some(getter) = self.getter else {
            return Err(rejected::<T>(PropertyError::MissingGetter { kind: KIND }));
        };
        let Some(setter) = self.setter else {
            return Err(rejected::<T>(PropertyError::MissingSetter { kind: KIND }));
        };
        built::<B, T>(KIND);
        Ok(Property::from_parts(self.binding, getter, setter))
    }

    /// Any setter supplied is dropped.
    pub fn build_read_only(self) -> PropertyResult<ReadOnly<B, T>> {
        const KIND: AccessKind = AccessKind::ReadOnly;

        let Some(getter) = self.getter else {
            return Err(rejected::<T>(PropertyError::MissingGetter { kind: KIND }));
        };
        built::<B, T>(KIND);
        Ok(Property::from_parts(self.binding, getter, NoAccessor))
    }

    /// Any getter supplied is dropped.
    pub fn build_write_only(self) -> PropertyResult<WriteOnly<B, T>> {
        const KIND: AccessKind = AccessKind::WriteOnly;

        let Some(setter) = self.setter else {
            return Err(rejected::<T>(PropertyError::MissingSetter { kind: KIND }));
        };
        built::<B, T>(KIND);
        Ok(Property::from_parts(self.binding, NoAccessor, setter))
    }
}

fn built<B: Binding, T>(kind: AccessKind) {
    log::trace!(
        "built {kind} property of {} ({})",
        type_name::<T>(),
        if <B::IsStatic as crate::primitives::Bool>::VALUE { "static" } else { "instance" },
    );
}

fn rejected<T>(err: PropertyError) -> PropertyError {
    log::debug!("rejected property of {}: {err}", type_name::<T>());
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AccessKind, PropertyError};
    use core::cell::Cell;

    struct Gauge {
        value: Cell<i32>,
    }

    fn read(g: &Gauge) -> i32 {
        g.value.get()
    }

    fn write(g: &Gauge, v: i32) {
        g.value.set(v)
    }

    #[test]
    fn test_build_all_variants() {
        let gauge = Gauge { value: Cell::new(1) };

        let mut rw = Initializer::of(&gauge)
            .getter(read)
            .setter(write)
            .build_read_write()
            .unwrap();
        rw.set(2);
        assert_eq!(rw.get(), 2);

        let ro = Initializer::of(&gauge).getter(read).setter(write).build_read_only().unwrap();
        assert_eq!(ro.get(), 2);

        let mut wo = Initializer::of(&gauge).setter(write).build_write_only().unwrap();
        wo.set(5);
        assert_eq!(gauge.value.get(), 5);
    }

    #[test]
    fn test_missing_accessors_are_rejected() {
        let gauge = Gauge { value: Cell::new(0) };

        let err = Initializer::of(&gauge).setter(write).build_read_write().err();
        assert_eq!(err, Some(PropertyError::MissingGetter { kind: AccessKind::ReadWrite }));

        let err = Initializer::of(&gauge).getter(read).build_read_write().err();
        assert_eq!(err, Some(PropertyError::MissingSetter { kind: AccessKind::ReadWrite }));

        let err = Initializer::of(&gauge).setter(write).build_read_only().err();
        assert_eq!(err, Some(PropertyError::MissingGetter { kind: AccessKind::ReadOnly }));

        let err = Initializer::of(&gauge).getter(read).build_write_only().err();
        assert_eq!(err, Some(PropertyError::MissingSetter { kind: AccessKind::WriteOnly }));
    }

    #[test]
    fn test_exclusive_and_static() {
        struct Plain {
            n: u8,
        }

        let mut plain = Plain { n: 1 };
        let mut p = Initializer::of_mut(&mut plain)
            .getter(|p| p.n)
            .setter(|p, v| p.n = v)
            .build_read_write()
            .unwrap();
        p += 4u8;
        assert!(!p.is_static());
        drop(p);
        assert_eq!(plain.n, 5);

        let s = Initializer::statik().getter(|| 7u64).build_read_only().unwrap();
        assert!(s.is_static());
        assert_eq!(s.get(), 7);
    }

    #[test]
    fn test_static_missing_setter() {
        let err = Initializer::statik().getter(|| 7u64).build_read_write().err();
        assert_eq!(err, Some(PropertyError::MissingSetter { kind: AccessKind::ReadWrite }));

        let err = Initializer::<_, u64>::statik().build_write_only().err();
        assert_eq!(err, Some(PropertyError::MissingSetter { kind: AccessKind::WriteOnly }));
    }
}
