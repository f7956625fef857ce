//! Fixed arity numeric vectors with pitch/yaw/roll helpers.
//!
//! ```
//! use fixed_vec::{vec3, PITCH, YAW, ROLL};
//!
//! let mut view = vec3(450.0_f32, -200.0, 12.0);
//! view.normalize_angle();
//! view.clamp_angle();
//! assert_eq!([view[PITCH], view[YAW], view[ROLL]], [89.0, 160.0, 0.0]);
//!
//! assert_eq!(vec3(3.0_f64, 4.0, 12.0).length_prefix::<2>(), 5.0);
//! ```
//!
//! Prefix lengths are checked when the call is compiled:
//!
//! ```compile_fail
//! let v = fixed_vec::vec3(1.0_f32, 2.0, 3.0);
//! v.length_prefix::<4>();
//! ```
//!
//! including against a shorter operand:
//!
//! ```compile_fail
//! let a = fixed_vec::vec3(1, 2, 3);
//! a.dot_prefix::<3, 2>(&fixed_vec::vec2(4, 5));
//! ```
//!
//! and orientation helpers only exist for three float components:
//!
//! ```compile_fail
//! let mut v = fixed_vec::vec3(1, 2, 3);
//! v.normalize_angle();
//! ```
//!
//! ```compile_fail
//! let mut v = fixed_vec::vec4(1.0_f32, 2.0, 3.0, 4.0);
//! v.clamp_angle();
//! ```

mod angle;
mod scalar;
mod vector;

pub use angle::{FULL_TURN, PITCH, PITCH_LIMIT, ROLL, YAW, YAW_LIMIT};
pub use scalar::{Angle, Scalar, Sqrt};
pub use vector::{FixedVector, V2, V3, V4, vec2, vec3, vec4};

/// A plain struct whose fields map, in declaration order, onto the components
/// of a `FixedVector<T, N>`. Usually derived with
/// `fixed_vec_derive::NamedVecOps`.
pub trait NamedVecOps<T: Scalar, const N: usize>: Copy {
    const SIZE: usize = N;

    fn to_fixed(&self) -> FixedVector<T, N>;
    fn from_fixed(v: &FixedVector<T, N>) -> Self;

    fn to_svector(&self) -> nalgebra::SVector<T, N> {
        self.to_fixed().to_svector()
    }

    fn from_svector(v: &nalgebra::SVector<T, N>) -> Self {
        Self::from_fixed(&FixedVector::from_svector(v))
    }
}

impl<T: Scalar, const N: usize> NamedVecOps<T, N> for FixedVector<T, N> {
    fn to_fixed(&self) -> FixedVector<T, N> {
        *self
    }

    fn from_fixed(v: &FixedVector<T, N>) -> Self {
        *v
    }
}
