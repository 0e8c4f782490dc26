use crate::{
    interaction::Intersection,
    math::{Ray, Vec3},
    scene::Scene,
};

/// Shadow rays ignore hits closer than this to their origin so surfaces don't shadow themselves.
pub const SHADOW_EPSILON: f64 = 1e-4;

/// Tests if anything blocks the segment between two points.
pub struct VisibilityTester {
    p0: Vec3<f64>,
    p1: Vec3<f64>,
    // Blockers closer than this to p0 are ignored
    bias: f64,
}

impl VisibilityTester {
    pub fn new(p0: Vec3<f64>, p1: Vec3<f64>) -> Self {
        Self {
            p0,
            p1,
            bias: SHADOW_EPSILON,
        }
    }

    /// Creates a tester from `hit` towards `p1` that skips the hit's own surface.
    pub fn from_hit(hit: &Intersection, p1: Vec3<f64>) -> Self {
        Self {
            p0: hit.position,
            p1,
            bias: hit.shadow_bias,
        }
    }

    /// Returns the ray from `p0` towards `p1` and the distance between them.
    ///
    /// `None` if the points coincide.
    pub fn ray(&self) -> Option<(Ray<f64>, f64)> {
        Ray::between(self.p0, self.p1).map(|ray| (ray, (self.p1 - self.p0).len()))
    }

    /// Returns `true` if no geometry in `scene` lies between the points.
    pub fn unoccluded(&self, scene: &Scene) -> bool {
        match self.ray() {
            Some((ray, dist)) => !scene
                .find_first_intersection(&ray, self.bias, dist)
                .is_hit(),
            None => true,
        }
    }
}
