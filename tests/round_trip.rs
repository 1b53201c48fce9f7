//! Round-trip: `set(v); get() == v` for every value.

use std::cell::{Cell, RefCell};

use proptest::prelude::*;
use tola_props::prelude::*;

struct Slot<T> {
    value: RefCell<T>,
}

impl<T: Clone> Slot<T> {
    fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
        }
    }

    fn value(&self) -> ReadWrite<Bound<'_, Self>, T> {
        Bound::new(self).read_write(Self::read, Self::write)
    }

    fn read(&self) -> T {
        self.value.borrow().clone()
    }

    fn write(&self, value: T) {
        *self.value.borrow_mut() = value;
    }
}

struct Plain {
    value: i64,
}

thread_local! {
    static GLOBAL: Cell<i32> = const { Cell::new(0) };
}

fn global() -> ReadWrite<Unbound, i32> {
    Unbound.read_write(|| GLOBAL.with(Cell::get), |v| GLOBAL.with(|g| g.set(v)))
}

proptest! {
    #[test]
    fn round_trip_i32(v in any::<i32>()) {
        let slot = Slot::new(0i32);
        slot.value().set(v);
        prop_assert_eq!(slot.value().get(), v);
        prop_assert!(slot.value() == v);
    }

    #[test]
    fn round_trip_i64_exclusive(v in any::<i64>()) {
        let mut plain = Plain { value: 0 };
        let mut p = BoundMut::new(&mut plain).read_write(|p: &Plain| p.value, |p: &mut Plain, v| p.value = v);
        p.set(v);
        prop_assert_eq!(p.get(), v);
    }

    #[test]
    fn round_trip_string(v in ".*") {
        let slot = Slot::new(String::new());
        slot.value().set(v.clone());
        prop_assert_eq!(slot.value().get(), v.clone());
        prop_assert!(slot.value() == v);
    }

    #[test]
    fn round_trip_static(v in any::<i32>()) {
        global().set(v);
        prop_assert_eq!(global().get(), v);
    }

    #[test]
    fn assign_copies_between_properties(a in any::<u16>(), b in any::<u16>()) {
        let left = Slot::new(a);
        let right = Slot::new(b);
        left.value().assign(right.value());
        prop_assert_eq!(left.value().get(), b);
        prop_assert_eq!(right.value().get(), b);
    }
}
