use core::ops::{Deref, DerefMut};

/// A fetched copy of a property's value, for reaching its fields and methods.
///
/// Auto-deref continues through the value, so a property holding a pointer
/// (`Box<T>`, `&T`, `Rc<T>`) gives access to the pointee. Writes only touch
/// the copy; store them back with `set` when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldAccess<T> {
    value: T,
}

impl<T> FieldAccess<T> {
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for FieldAccess<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for FieldAccess<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

#[cfg(test)]
mod tests {
    use crate::binding::Bound;
    use core::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Point {
        fn manhattan(&self) -> i32 {
            self.x.abs() + self.y.abs()
        }
    }

    #[test]
    fn test_field_and_method_access() {
        let cell = Cell::new(Point { x: 3, y: -4 });
        let p = Bound::new(&cell).read_only(|c: &Cell<Point>| c.get());
        assert_eq!(p.fields().x, 3);
        assert_eq!(p.fields().manhattan(), 7);
    }

    #[test]
    fn test_mutation_stays_local() {
        let cell = Cell::new(Point { x: 1, y: 1 });
        let p = Bound::new(&cell).read_only(|c: &Cell<Point>| c.get());
        let mut copy = p.fields();
        copy.x = 99;
        assert_eq!(cell.get().x, 1);
        assert_eq!(copy.into_inner(), Point { x: 99, y: 1 });
    }

    #[test]
    fn test_reaches_through_pointers() {
        fn load<'v>(c: &Cell<&'v i32>) -> &'v i32 {
            c.get()
        }

        let value = 41;
        let holder = Cell::new(&value);
        let p = Bound::new(&holder).read_only(load);
        assert_eq!(p.fields().checked_add(1), Some(42));
        assert_eq!(p.deref_value(), 41);
    }
}
