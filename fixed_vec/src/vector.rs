use core::ops::{Index, IndexMut};
use nalgebra::SVector;

use crate::scalar::{Scalar, Sqrt};

/// `N` components of `T`, stored inline.
///
/// The arity is part of the type. Components are addressed by index; for the
/// three component angle form see [`PITCH`](crate::PITCH),
/// [`YAW`](crate::YAW) and [`ROLL`](crate::ROLL).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedVector<T, const N: usize>([T; N]);

pub type V2<T> = FixedVector<T, 2>;
pub type V3<T> = FixedVector<T, 3>;
pub type V4<T> = FixedVector<T, 4>;

#[inline]
pub const fn vec2<T>(x: T, y: T) -> V2<T> {
    FixedVector([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> V3<T> {
    FixedVector([x, y, z])
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> V4<T> {
    FixedVector([x, y, z, w])
}

// Support code for compile time prefix checks
struct Prefix<const K: usize, const N: usize>;

impl<const K: usize, const N: usize> Prefix<K, N> {
    const FITS: () = assert!(K <= N, "prefix length must not exceed the component count");
}

impl<T, const N: usize> FixedVector<T, N> {
    pub const SIZE: usize = N;

    #[inline]
    pub const fn new(contents: [T; N]) -> Self {
        Self(contents)
    }

    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn set(&mut self, contents: [T; N]) {
        self.0 = contents;
    }

    /// # Panics
    ///
    /// If `i >= N`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> &mut T {
        assert!(i < N, "index {i} out of range for a vector of {N} components");
        &mut self.0[i]
    }
}

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    #[inline]
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }

    /// # Panics
    ///
    /// If `i >= N`.
    #[inline]
    pub fn at(&self, i: usize) -> T {
        assert!(i < N, "index {i} out of range for a vector of {N} components");
        self.0[i]
    }

    #[inline]
    pub fn contents(&self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn copy(&self) -> Self {
        *self
    }

    /// # Panics
    ///
    /// Integer scalars panic on overflow in debug builds, e.g.
    /// `vec3(16_u8, 0, 0).dot_self()`. The other dot forms behave the same.
    #[inline]
    pub fn dot_self(&self) -> T {
        self.dot_self_prefix::<N>()
    }

    /// Sum of squares of the first `K` components.
    pub fn dot_self_prefix<const K: usize>(&self) -> T {
        let () = Prefix::<K, N>::FITS;
        self.0[..K]
            .iter()
            .fold(T::zero(), |dot, &c| dot + c * c)
    }

    #[inline]
    pub fn dot_scalar(&self, scalar: T) -> T {
        self.dot_scalar_prefix::<N>(scalar)
    }

    /// Sum of the first `K` components, each multiplied by `scalar`.
    pub fn dot_scalar_prefix<const K: usize>(&self, scalar: T) -> T {
        let () = Prefix::<K, N>::FITS;
        self.0[..K]
            .iter()
            .fold(T::zero(), |dot, &c| dot + c * scalar)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.dot_prefix::<N, N>(other)
    }

    /// Dot product of the first `K` components against a vector of `M`
    /// components. Both `K <= N` and `K <= M` are checked at compile time.
    pub fn dot_prefix<const K: usize, const M: usize>(&self, other: &FixedVector<T, M>) -> T {
        let () = Prefix::<K, N>::FITS;
        let () = Prefix::<K, M>::FITS;
        dot(&self.0[..K], &other.0[..K])
    }

    /// Dot product of the first `K` components against a caller supplied
    /// slice.
    ///
    /// # Panics
    ///
    /// If `other` holds fewer than `K` values.
    pub fn dot_slice_prefix<const K: usize>(&self, other: &[T]) -> T {
        let () = Prefix::<K, N>::FITS;
        assert!(
            other.len() >= K,
            "dot product over {K} components against a slice of {}",
            other.len()
        );
        dot(&self.0[..K], &other[..K])
    }

    pub fn to_svector(&self) -> SVector<T, N> {
        SVector::from(self.0)
    }

    pub fn from_svector(v: &SVector<T, N>) -> Self {
        Self(core::array::from_fn(|i| v[i]))
    }
}

impl<T: Scalar + Sqrt, const N: usize> FixedVector<T, N> {
    /// Euclidean length. Integer vectors report it as `f64`.
    #[inline]
    pub fn length(&self) -> <T as Sqrt>::Output {
        self.dot_self().sqrt()
    }

    /// Euclidean length of the first `K` components, e.g. the planar length of
    /// a direction vector with `K = 2`.
    #[inline]
    pub fn length_prefix<const K: usize>(&self) -> <T as Sqrt>::Output {
        self.dot_self_prefix::<K>().sqrt()
    }

    #[inline]
    pub fn length_scalar(&self, scalar: T) -> <T as Sqrt>::Output {
        self.dot_scalar(scalar).sqrt()
    }

    #[inline]
    pub fn length_scalar_prefix<const K: usize>(&self, scalar: T) -> <T as Sqrt>::Output {
        self.dot_scalar_prefix::<K>(scalar).sqrt()
    }

    #[inline]
    pub fn length_with(&self, other: &Self) -> <T as Sqrt>::Output {
        self.dot(other).sqrt()
    }

    #[inline]
    pub fn length_with_prefix<const K: usize, const M: usize>(
        &self,
        other: &FixedVector<T, M>,
    ) -> <T as Sqrt>::Output {
        self.dot_prefix::<K, M>(other).sqrt()
    }
}

fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |dot, (&lhs, &rhs)| dot + lhs * rhs)
}

impl<T: Scalar, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    #[inline]
    fn from(contents: [T; N]) -> Self {
        Self(contents)
    }
}

impl<T, const N: usize> From<FixedVector<T, N>> for [T; N] {
    #[inline]
    fn from(v: FixedVector<T, N>) -> Self {
        v.0
    }
}

impl<T: Scalar, const N: usize> From<SVector<T, N>> for FixedVector<T, N> {
    #[inline]
    fn from(v: SVector<T, N>) -> Self {
        Self::from_svector(&v)
    }
}

impl<T: Scalar, const N: usize> From<FixedVector<T, N>> for SVector<T, N> {
    #[inline]
    fn from(v: FixedVector<T, N>) -> Self {
        v.to_svector()
    }
}
