//! Capabilities Rust has no std trait for.
//!
//! - `Pos`: unary plus.
//! - `One`: the unit step used by increment and decrement.

/// Unary plus.
pub trait Pos {
    type Output;
    fn pos(self) -> Self::Output;
}

/// Types that can be stepped by one.
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_numeric {
    ($one:literal => $($ty:ty),*) => {
        $(
            impl Pos for $ty {
                type Output = $ty;
                #[inline(always)]
                fn pos(self) -> $ty { self }
            }

            impl One for $ty {
                #[inline(always)]
                fn one() -> $ty { $one }
            }
        )*
    };
}

impl_numeric!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(1.0 => f32, f64);

impl<T: One> One for core::num::Wrapping<T> {
    fn one() -> Self {
        core::num::Wrapping(T::one())
    }
}
