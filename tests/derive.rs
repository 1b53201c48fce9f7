//! Tests for #[derive(Properties)] and #[derive(Operand)]

use std::cell::Cell;
use std::ops::{Add, Mul};

use tola_props::prelude::*;

// =============================================================================
// Operand
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Operand)]
struct Celsius(f64);

impl Add for Celsius {
    type Output = Celsius;

    fn add(self, rhs: Celsius) -> Celsius {
        Celsius(self.0 + rhs.0)
    }
}

#[derive(Debug, Clone, PartialEq, Operand)]
struct Scaled<T>(T);

impl<T: Mul<Output = T>> Mul for Scaled<T> {
    type Output = Scaled<T>;

    fn mul(self, rhs: Scaled<T>) -> Scaled<T> {
        Scaled(self.0 * rhs.0)
    }
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Properties)]
#[property(pub temperature: Celsius, get = Oven::read, set = Oven::write)]
#[property(fahrenheit: f64, get = Oven::read_f)]
#[property(target: Celsius, set = Oven::retarget)]
struct Oven {
    temperature: Cell<Celsius>,
    target: Cell<Celsius>,
}

impl Oven {
    fn new(c: f64) -> Self {
        Self {
            temperature: Cell::new(Celsius(c)),
            target: Cell::new(Celsius(0.0)),
        }
    }

    fn read(&self) -> Celsius {
        self.temperature.get()
    }

    fn write(&self, value: Celsius) {
        self.temperature.set(value)
    }

    fn read_f(&self) -> f64 {
        self.temperature.get().0 * 9.0 / 5.0 + 32.0
    }

    fn retarget(&self, value: Celsius) {
        self.target.set(value)
    }
}

#[derive(Properties)]
#[property(level: u8, get = Dial::current, set = Dial::set_level, mutable)]
struct Dial {
    level: u8,
}

impl Dial {
    fn current(&self) -> u8 {
        self.level
    }

    fn set_level(&mut self, level: u8) {
        self.level = level.min(10);
    }
}

#[derive(Properties)]
#[property(inner: T, get = Wrapper::<T>::read, set = Wrapper::<T>::write)]
struct Wrapper<T: Copy> {
    inner: Cell<T>,
}

impl<T: Copy> Wrapper<T> {
    fn read(&self) -> T {
        self.inner.get()
    }

    fn write(&self, value: T) {
        self.inner.set(value)
    }
}

#[test]
fn test_generated_variants() {
    let oven = Oven::new(100.0);

    oven.temperature().set(Celsius(180.0));
    assert_eq!(oven.temperature(), Celsius(180.0));
    assert_eq!(oven.fahrenheit(), 356.0);

    oven.target().set(Celsius(200.0));
    assert_eq!(oven.target.get(), Celsius(200.0));
}

#[test]
fn test_derived_operand_forwards_both_ways() {
    let oven = Oven::new(20.0);
    assert_eq!(oven.temperature() + Celsius(5.0), Celsius(25.0));
    assert_eq!(Celsius(5.0) + oven.temperature(), Celsius(25.0));
    assert!(oven.temperature() < Celsius(21.0));
    assert!(Celsius(30.0) > oven.temperature());

    let mut t = oven.temperature();
    t += Celsius(1.5);
    assert_eq!(oven.temperature.get(), Celsius(21.5));
}

#[test]
fn test_generic_operand() {
    let cell = Cell::new(3);
    let p = Bound::new(&cell).read_only(|c: &Cell<i32>| Scaled(c.get()));
    assert_eq!(p * Scaled(4), Scaled(12));
    assert_eq!(Scaled(5) * p, Scaled(15));
}

#[test]
fn test_mutable_property() {
    let mut dial = Dial { level: 4 };
    let mut level = dial.level();
    level += 3u8;
    level += 9u8;
    assert_eq!(level.get(), 10);
    assert_eq!(dial.level, 10);
}

#[test]
fn test_generic_owner() {
    let w = Wrapper { inner: Cell::new('a') };
    w.inner().set('z');
    assert_eq!(w.inner().get(), 'z');
    assert!(w.inner() == 'z');
}
