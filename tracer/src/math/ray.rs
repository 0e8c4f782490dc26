use super::{common::FloatValueType, vector::Vec3};

/// A ray with a unit length direction.
#[derive(Copy, PartialEq, Clone, Debug)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    /// Origin
    pub o: Vec3<T>,
    /// Unit direction
    pub d: Vec3<T>,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray` from `o` toward `d`, normalizing `d`.
    ///
    /// Returns `None` if `d` has no direction.
    pub fn new(o: Vec3<T>, d: Vec3<T>) -> Option<Self> {
        debug_assert!(!o.has_nans());

        d.try_normalized().map(|d| Self { o, d })
    }

    /// Creates a new `Ray` starting at `from` and going through `to`.
    ///
    /// Returns `None` if the points coincide.
    pub fn between(from: Vec3<T>, to: Vec3<T>) -> Option<Self> {
        Self::new(from, to - from)
    }

    /// Finds the point on this `Ray` at distance `t`.
    pub fn point(&self, t: T) -> Vec3<T> {
        self.o + self.d * t
    }
}
