use core::ops::{AddAssign, Mul};
use num_traits::{Float, Zero};

/// Component type of a [`FixedVector`](crate::FixedVector).
///
/// Every primitive integer and float qualifies. The `nalgebra::Scalar` bound
/// is what lets a vector move in and out of `SVector`.
pub trait Scalar:
    nalgebra::Scalar
  + Copy
  + Zero
  + Mul<Self, Output = Self>
  + AddAssign
{
}

impl<T> Scalar for T
where
    T: nalgebra::Scalar
     + Copy
     + Zero
     + Mul<T, Output = T>
     + AddAssign
{
}

/// Integers are widened to `f64` before the root.
pub trait Sqrt {
    type Output;

    fn sqrt(self) -> Self::Output;
}

macro_rules! impl_sqrt_float {
    ($($t:ty),*) => { $(
        impl Sqrt for $t {
            type Output = $t;

            #[inline]
            fn sqrt(self) -> $t {
                <$t>::sqrt(self)
            }
        }
    )* };
}

macro_rules! impl_sqrt_int {
    ($($t:ty),*) => { $(
        impl Sqrt for $t {
            type Output = f64;

            #[inline]
            fn sqrt(self) -> f64 {
                (self as f64).sqrt()
            }
        }
    )* };
}

impl_sqrt_float!(f32, f64);
impl_sqrt_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point scalars that may carry pitch/yaw/roll angles.
///
/// Orientation helpers on [`FixedVector`](crate::FixedVector) are only
/// implemented for `FixedVector<T, 3>` where `T: Angle`, so calling them on an
/// integer vector or on a vector of the wrong arity does not compile.
pub trait Angle: Scalar + Float + Sqrt<Output = Self> + sealed::Sealed {
    fn constant(value: f64) -> Self;

    /// IEEE 754 remainder: `self - n * rhs` where `n` is `self / rhs` rounded
    /// to the nearest integer, ties to even. Unlike `%` the result can have
    /// the opposite sign of `self`.
    fn remainder(self, rhs: Self) -> Self {
        let two = Self::one() + Self::one();
        let modulus = Float::abs(rhs);
        let half = modulus / two;
        let r = self % rhs;

        let odd_quotient = || ((self - r) / rhs) % two != Self::zero();

        if r > half || (r == half && odd_quotient()) {
            r - modulus
        } else if r < -half || (r == -half && odd_quotient()) {
            r + modulus
        } else {
            r
        }
    }
}

impl Angle for f32 {
    #[inline]
    fn constant(value: f64) -> Self {
        value as f32
    }
}

impl Angle for f64 {
    #[inline]
    fn constant(value: f64) -> Self {
        value
    }
}
