use super::{quadric_intersection, solve_quadratic, ShapeError};
use crate::{
    interaction::Intersection,
    materials::Material,
    math::{Color, Ray, Vec3},
};

/// An axis-aligned ellipsoid, i.e. a sphere of `radius` stretched by `axis_scales`.
#[derive(Clone, Debug)]
pub struct Ellipsoid {
    center: Vec3<f64>,
    axis_scales: Vec3<f64>,
    radius: f64,
    material: Material,
    color: Color<f64>,
}

impl Ellipsoid {
    /// Creates a new `Ellipsoid`.
    ///
    /// Fails if any axis scale is zero or not finite.
    pub fn new(
        center: Vec3<f64>,
        axis_scales: Vec3<f64>,
        radius: f64,
        material: Material,
        color: Color<f64>,
    ) -> Result<Self, ShapeError> {
        let degenerate = |s: f64| s == 0.0 || !s.is_finite();
        if degenerate(axis_scales.x) || degenerate(axis_scales.y) || degenerate(axis_scales.z) {
            return Err(ShapeError::DegenerateAxisScale(axis_scales));
        }
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }

        Ok(Self {
            center,
            axis_scales,
            radius,
            material,
            color,
        })
    }

    pub fn intersect(&self, ray: &Ray<f64>, min_dist: f64, max_dist: f64) -> Intersection {
        // Solve in the space where the ellipsoid is a sphere, t stays the same
        let d = ray.d / self.axis_scales;
        let oc = (ray.o - self.center) / self.axis_scales;

        let a = d.len_sqr();
        let b = 2.0 * d.dot(oc);
        let c = oc.len_sqr() - self.radius * self.radius;

        quadric_intersection(
            ray,
            solve_quadratic(a, b, c),
            min_dist,
            max_dist,
            |ray, t, visible| {
                Intersection::new(
                    ray,
                    t,
                    visible,
                    self.normal(ray.point(t)),
                    self.material,
                    self.color,
                )
            },
        )
    }

    pub fn normal(&self, p: Vec3<f64>) -> Vec3<f64> {
        let s2 = Vec3::new(
            self.axis_scales.x * self.axis_scales.x,
            self.axis_scales.y * self.axis_scales.y,
            self.axis_scales.z * self.axis_scales.z,
        );
        ((p - self.center) * 2.0 / s2)
            .try_normalized()
            .unwrap_or_else(Vec3::zeros)
    }
}
