//! Operators Rust cannot overload on a property, exposed as methods.

use std::cell::{Cell, RefCell};

use tola_props::prelude::*;

struct Panel {
    armed: Cell<bool>,
    readings: RefCell<Vec<u16>>,
    boxed: RefCell<Box<i64>>,
}

impl Panel {
    fn new() -> Self {
        Self {
            armed: Cell::new(true),
            readings: RefCell::new(vec![7, 8, 9]),
            boxed: RefCell::new(Box::new(-3)),
        }
    }

    fn armed(&self) -> ReadOnly<Bound<'_, Self>, bool> {
        Bound::new(self).read_only(|p| p.armed.get())
    }

    fn readings(&self) -> ReadOnly<Bound<'_, Self>, Vec<u16>> {
        Bound::new(self).read_only(|p| p.readings.borrow().clone())
    }

    fn boxed(&self) -> ReadOnly<Bound<'_, Self>, Box<i64>> {
        Bound::new(self).read_only(|p| p.boxed.borrow().clone())
    }
}

#[test]
fn test_logical_methods() {
    let panel = Panel::new();
    assert!(panel.armed().and(true));
    assert!(!panel.armed().and(false));
    assert!(panel.armed().or(false));
    assert!(!panel.armed().and(!panel.armed()));
    assert!(panel.armed().and(panel.armed()));
}

#[test]
fn test_subscript_returns_element() {
    let panel = Panel::new();
    assert_eq!(panel.readings().at(1), 8);
    assert_eq!(panel.readings().at(2), 9);
}

#[test]
fn test_dereference_and_fields() {
    let panel = Panel::new();
    assert_eq!(panel.boxed().deref_value(), -3);
    assert_eq!(panel.boxed().fields().abs(), 3);
    assert_eq!(panel.readings().fields().len(), 3);
}

#[test]
fn test_unary_plus() {
    let cell = Cell::new(-2.5f32);
    let p = Bound::new(&cell).read_only(|c: &Cell<f32>| c.get());
    assert_eq!(p.pos(), -2.5);
    assert_eq!(-p, 2.5);
}

#[test]
fn test_logical_with_property_on_the_right() {
    let panel = Panel::new();
    assert!(true.and(panel.armed()));
    assert!(!false.and(panel.armed()));
    assert!(false.or(panel.armed()));

    panel.armed.set(false);
    assert!(!true.and(panel.armed()));
    assert!(!false.or(&panel.armed()));
}

#[test]
fn test_property_as_index() {
    let slot = Cell::new(1usize);
    let index = Bound::new(&slot).read_only(|c: &Cell<usize>| c.get());

    let readings = vec![10, 20, 30];
    assert_eq!(readings[index], 20);
    assert_eq!(readings.as_slice()[index], 20);
    assert_eq!([7u8, 8, 9][index], 8);

    slot.set(2);
    assert_eq!(readings[index], 30);

    let window = Cell::new(0..2);
    let range = Bound::new(&window).read_only(|c: &Cell<std::ops::Range<usize>>| {
        let r = c.take();
        c.set(r.clone());
        r
    });
    assert_eq!(readings[range], [10, 20]);
}
