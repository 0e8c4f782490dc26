use tracer_derive::*;

use super::common::FloatValueType;

/// An RGBA color. Components are not clamped until the film is encoded.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    AbsDiffEq,
    RelativeEq,
    Add,
    Sub,
    Mul,
    MulScalar,
    DivScalar,
    AddAssign,
    SubAssign,
    MulAssign,
    MulAssignScalar,
)]
pub struct Color<T>
where
    T: FloatValueType,
{
    /// The red component
    pub r: T,
    /// The green component
    pub g: T,
    /// The blue component
    pub b: T,
    /// The alpha component, opacity for color maps
    pub a: T,
}

impl<T> Color<T>
where
    T: FloatValueType,
{
    /// Constructs a new color.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(r: T, g: T, b: T, a: T) -> Self {
        let c = Self { r, g, b, a };
        debug_assert!(!c.has_nans());
        c
    }

    /// The "no material contribution" color with all components, alpha included, at 0.
    #[inline]
    pub fn none() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Opaque black.
    #[inline]
    pub fn black() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Opaque white.
    #[inline]
    pub fn white() -> Self {
        Self::new(T::one(), T::one(), T::one(), T::one())
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan() || self.a.is_nan()
    }

    /// Returns the color with every component clamped to [0, 1].
    pub fn clamped(&self) -> Self {
        let clamp = |v: T| v.max(T::zero()).min(T::one());
        Self::new(clamp(self.r), clamp(self.g), clamp(self.b), clamp(self.a))
    }

    /// Encodes the color as 8-bit RGBA, rounding each clamped channel up.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamped();
        // Clamped to [0, 1] so the casts can't fail
        let quantize = |v: T| {
            (v * T::from_f64(255.0).unwrap_or_else(T::one))
                .ceil()
                .to_u8()
                .unwrap_or(u8::MAX)
        };
        [quantize(c.r), quantize(c.g), quantize(c.b), quantize(c.a)]
    }
}

impl<T> From<[T; 4]> for Color<T>
where
    T: FloatValueType,
{
    fn from(c: [T; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
