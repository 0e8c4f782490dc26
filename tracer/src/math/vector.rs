use std::ops::{Index, IndexMut};

use tracer_derive::*;

use super::common::FloatValueType;

/// A three-dimensional vector.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    AbsDiffEq,
    RelativeEq,
    Neg,
    Add,
    Sub,
    Div,
    MulScalar,
    DivScalar,
    AddAssign,
    SubAssign,
    MulAssignScalar,
    DivAssignScalar,
)]
pub struct Vec3<T>
where
    T: FloatValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

/// Shorthand constructor
pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T>
where
    T: FloatValueType,
{
    Vec3::new(x, y, z)
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Constructs a new vector.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let v = Self { x, y, z };
        debug_assert!(!v.has_nans());
        v
    }

    /// Constructs a new vector of 0s.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Constructs a new vector of 1s.
    #[inline]
    pub fn ones() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the dot product of the two vectors.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of the two vectors.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the vector's squared length.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Returns the vector's length.
    #[inline]
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns the normalized vector.
    ///
    /// The vector must have a non-zero length, see [`Vec3::try_normalized`].
    #[inline]
    pub fn normalized(&self) -> Self {
        debug_assert!(self.len_sqr() > T::zero());

        *self / self.len()
    }

    /// Returns the normalized vector or `None` if it has no finite direction.
    #[inline]
    pub fn try_normalized(&self) -> Option<Self> {
        let len = self.len();
        if len > T::zero() && len.is_finite() {
            Some(*self / len)
        } else {
            None
        }
    }

    /// Finds the value of the minimum component in this `Vec3`.
    #[inline]
    pub fn min_comp(&self) -> T {
        debug_assert!(!self.has_nans());

        self.x.min(self.y.min(self.z))
    }

    /// Finds the value of the maximum component in this `Vec3`.
    #[inline]
    pub fn max_comp(&self) -> T {
        debug_assert!(!self.has_nans());

        self.x.max(self.y.max(self.z))
    }
}

impl<T> From<[T; 3]> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(v: [T; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl<T> Index<usize> for Vec3<T>
where
    T: FloatValueType,
{
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index {} out of bounds", i),
        }
    }
}

impl<T> IndexMut<usize> for Vec3<T>
where
    T: FloatValueType,
{
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index {} out of bounds", i),
        }
    }
}
