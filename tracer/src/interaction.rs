use crate::{
    materials::Material,
    math::{Color, Ray, Vec3},
    visibility::SHADOW_EPSILON,
};

/// Result of testing a ray against geometry.
///
/// `valid` is `false` when the ray has no mathematical intersection with the
/// geometry. A valid intersection is `visible` only when its distance lies in
/// the queried range in front of the ray origin. Only intersections that are
/// both count as hits, see [`Intersection::is_hit`].
#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub valid: bool,
    pub visible: bool,
    /// Distance along the ray
    pub t: f64,
    /// World position
    pub position: Vec3<f64>,
    /// Unit surface normal
    pub normal: Vec3<f64>,
    pub material: Material,
    /// Base color of the geometry at the hit
    pub color: Color<f64>,
    /// Index of the hit geometry in the scene, filled in by the scene scan
    pub geometry: Option<usize>,
    /// Distance shadow rays from the hit travel before they can be blocked
    pub shadow_bias: f64,
}

impl Intersection {
    /// The "no intersection" result.
    pub fn none() -> Self {
        Self {
            valid: false,
            visible: false,
            t: 0.0,
            position: Vec3::zeros(),
            normal: Vec3::zeros(),
            material: Material::none(),
            color: Color::none(),
            geometry: None,
            shadow_bias: SHADOW_EPSILON,
        }
    }

    /// Creates a valid intersection at distance `t` along `ray`.
    pub fn new(
        ray: &Ray<f64>,
        t: f64,
        visible: bool,
        normal: Vec3<f64>,
        material: Material,
        color: Color<f64>,
    ) -> Self {
        debug_assert!(t.is_finite());
        debug_assert!(!normal.has_nans());

        Self {
            valid: true,
            visible,
            t,
            position: ray.point(t),
            normal,
            material,
            color,
            geometry: None,
            shadow_bias: SHADOW_EPSILON,
        }
    }

    /// Returns the intersection with shadow rays starting `bias` away from it.
    pub fn with_shadow_bias(self, bias: f64) -> Self {
        Self {
            shadow_bias: bias.max(SHADOW_EPSILON),
            ..self
        }
    }

    /// Returns `true` if this is a valid intersection in the queried range.
    pub fn is_hit(&self) -> bool {
        self.valid && self.visible
    }
}
